//! Domain data structures for skip options and the catalog holding them.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ports::CatalogError;
use crate::pricing::total_price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a skip option, unique within a catalog.
pub struct SkipId(pub u64);

impl fmt::Display for SkipId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A rentable skip as offered by a catalog source.
pub struct SkipOption {
    /// Unique identifier.
    pub id: SkipId,
    /// Capacity in yards.
    pub size: u32,
    /// Price before VAT.
    pub price_before_vat: f64,
    /// VAT rate as a percentage, e.g. `20.0` for 20%.
    pub vat: f64,
    /// Length of the hire in days.
    pub hire_period_days: u32,
    /// Whether the skip may be placed on a public road.
    pub allowed_on_road: bool,
    /// Whether heavy waste (soil, rubble) is accepted.
    pub allows_heavy_waste: bool,
    /// Transport cost; present when transport is included.
    #[serde(default)]
    pub transport_cost: Option<f64>,
    /// Cost per tonne of waste, when the provider quotes one.
    #[serde(default)]
    pub per_tonne_cost: Option<f64>,
    /// Postcode the quote was made for.
    #[serde(default)]
    pub postcode: Option<String>,
    /// Area the quote was made for.
    #[serde(default)]
    pub area: Option<String>,
}

impl SkipOption {
    /// Total price including VAT. See [`total_price`].
    #[must_use]
    pub fn total_price(&self) -> f64 {
        total_price(self)
    }

    /// Whether the quote includes transport.
    #[must_use]
    pub fn transport_included(&self) -> bool {
        self.transport_cost.is_some()
    }

    fn check(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::Invalid {
            id: self.id,
            reason: reason.to_owned(),
        };

        if self.size == 0 {
            return Err(invalid("size must be greater than zero"));
        }
        if self.hire_period_days == 0 {
            return Err(invalid("hire period must be at least one day"));
        }
        if !is_amount(self.price_before_vat) {
            return Err(invalid("price before VAT must be a non-negative number"));
        }
        if !is_amount(self.vat) {
            return Err(invalid("VAT must be a non-negative number"));
        }
        if self.transport_cost.is_some_and(|cost| !is_amount(cost)) {
            return Err(invalid("transport cost must be a non-negative number"));
        }
        if self.per_tonne_cost.is_some_and(|cost| !is_amount(cost)) {
            return Err(invalid("per tonne cost must be a non-negative number"));
        }
        Ok(())
    }
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Size classes used to color options consistently.
pub enum SizeTier {
    /// Up to 6 yards.
    Small,
    /// Up to 12 yards.
    Medium,
    /// Anything bigger.
    Large,
}

impl SizeTier {
    /// Classify a skip size in yards.
    #[must_use]
    pub fn of(size: u32) -> Self {
        match size {
            0..=6 => Self::Small,
            7..=12 => Self::Medium,
            _ => Self::Large,
        }
    }
}

#[derive(Debug, Clone)]
/// Immutable, ordered list of validated skip options.
///
/// Cloning is cheap; every clone shares the same backing slice.
pub struct Catalog {
    options: Arc<[SkipOption]>,
}

impl Catalog {
    /// Validate the options and freeze them into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two options share an id and
    /// [`CatalogError::Invalid`] when an option violates a field constraint.
    /// A single bad record rejects the whole catalog.
    pub fn new(options: Vec<SkipOption>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            option.check()?;
            if !seen.insert(option.id) {
                return Err(CatalogError::DuplicateId(option.id));
            }
        }
        Ok(Self {
            options: options.into(),
        })
    }

    /// All options in catalog order.
    #[must_use]
    pub fn options(&self) -> &[SkipOption] {
        &self.options
    }

    /// Look up an option by id.
    #[must_use]
    pub fn get(&self, id: SkipId) -> Option<&SkipOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
