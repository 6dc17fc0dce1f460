//! Steps of the booking flow the skip browser is embedded in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::SkipOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A stage of the booking flow, in order.
pub enum BookingStep {
    /// Postcode and area lookup.
    Location,
    /// Choosing a skip; the stage this crate implements.
    SkipSelection,
    /// Choosing delivery and collection dates.
    DateSelection,
    /// Payment.
    Payment,
    /// Booking finished.
    Completed,
}

impl BookingStep {
    /// Every step in flow order.
    pub const ALL: [Self; 5] = [
        Self::Location,
        Self::SkipSelection,
        Self::DateSelection,
        Self::Payment,
        Self::Completed,
    ];

    /// Zero-based position in the flow.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Location => 0,
            Self::SkipSelection => 1,
            Self::DateSelection => 2,
            Self::Payment => 3,
            Self::Completed => 4,
        }
    }

    /// The step after this one; `Completed` is terminal.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Location => Self::SkipSelection,
            Self::SkipSelection => Self::DateSelection,
            Self::DateSelection => Self::Payment,
            Self::Payment | Self::Completed => Self::Completed,
        }
    }

    /// Short label shown in the stepper.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::SkipSelection => "Skip selection",
            Self::DateSelection => "Date selection",
            Self::Payment => "Payment",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Notification handed to the surrounding workflow when a skip is confirmed.
pub struct Confirmation {
    /// The chosen option.
    pub option: SkipOption,
    /// Where the booking flow continues.
    pub next_step: BookingStep,
}

impl Confirmation {
    /// Confirmation of `option` leaving the skip selection step.
    #[must_use]
    pub fn new(option: SkipOption) -> Self {
        Self {
            option,
            next_step: BookingStep::SkipSelection.next(),
        }
    }

    /// Human-readable summary, e.g. `8 Yard skip selected! Proceeding to next step...`.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{} Yard skip selected! Proceeding to next step...",
            self.option.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_in_flow_order() {
        for (position, step) in BookingStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), position, "{step}");
        }
    }

    #[test]
    fn next_walks_the_flow_and_stops_at_completed() {
        assert_eq!(BookingStep::Location.next(), BookingStep::SkipSelection, "location");
        assert_eq!(
            BookingStep::SkipSelection.next(),
            BookingStep::DateSelection,
            "skip selection"
        );
        assert_eq!(BookingStep::Completed.next(), BookingStep::Completed, "terminal");
    }
}
