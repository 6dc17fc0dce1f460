//! The at-most-one selection and its transitions.

use serde::{Deserialize, Serialize};

use crate::model::{SkipId, SkipOption};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
/// Invalid operations on the selection.
pub enum SelectionError {
    /// Confirm was requested while nothing is selected.
    #[error("No skip selected")]
    NothingSelected,
    /// The referenced option is not part of the catalog.
    #[error("Unknown skip option {0}")]
    UnknownOption(SkipId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Zero or one chosen option, held by id.
pub enum Selection {
    /// Nothing chosen.
    #[default]
    Unselected,
    /// The option with this id is chosen.
    Selected(SkipId),
}

impl Selection {
    /// Apply a select action for `option`.
    ///
    /// Selecting the chosen option again clears the selection; selecting a
    /// different one replaces it.
    pub fn select(&mut self, option: &SkipOption) {
        self.select_id(option.id);
    }

    pub(crate) fn select_id(&mut self, id: SkipId) {
        *self = match *self {
            Self::Selected(current) if current == id => Self::Unselected,
            Self::Unselected | Self::Selected(_) => Self::Selected(id),
        };
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        *self = Self::Unselected;
    }

    /// Id of the chosen option, if any.
    #[must_use]
    pub fn id(&self) -> Option<SkipId> {
        match *self {
            Self::Selected(id) => Some(id),
            Self::Unselected => None,
        }
    }

    /// Whether `id` is the chosen option.
    #[must_use]
    pub fn is_selected(&self, id: SkipId) -> bool {
        self.id() == Some(id)
    }

    /// Id to confirm.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NothingSelected`] in the unselected state.
    pub fn confirmable(&self) -> Result<SkipId, SelectionError> {
        self.id().ok_or(SelectionError::NothingSelected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(id: u64) -> SkipOption {
        SkipOption {
            id: SkipId(id),
            size: 4,
            price_before_vat: 200.0,
            vat: 20.0,
            hire_period_days: 7,
            allowed_on_road: true,
            allows_heavy_waste: false,
            transport_cost: None,
            per_tonne_cost: None,
            postcode: None,
            area: None,
        }
    }

    #[test]
    fn select_from_unselected_selects() {
        let mut selection = Selection::default();
        selection.select(&option(1));
        assert_eq!(selection, Selection::Selected(SkipId(1)), "selected");
    }

    #[test]
    fn selecting_same_option_twice_toggles_off() {
        for id in [1, 2, 42] {
            let mut selection = Selection::default();
            selection.select(&option(id));
            selection.select(&option(id));
            assert_eq!(selection, Selection::Unselected, "id {id}");
        }
    }

    #[test]
    fn selecting_another_option_replaces() {
        let mut selection = Selection::Selected(SkipId(1));
        selection.select(&option(2));
        assert_eq!(selection, Selection::Selected(SkipId(2)), "replaced");
        assert!(!selection.is_selected(SkipId(1)), "old id dropped");
    }

    #[test]
    fn reset_clears_from_any_state() {
        let mut selection = Selection::Selected(SkipId(3));
        selection.reset();
        assert_eq!(selection, Selection::Unselected, "from selected");
        selection.reset();
        assert_eq!(selection, Selection::Unselected, "from unselected");
    }

    #[test]
    fn confirm_requires_a_selection() {
        assert_eq!(
            Selection::Unselected.confirmable(),
            Err(SelectionError::NothingSelected),
            "unselected"
        );
        assert_eq!(
            Selection::Selected(SkipId(7)).confirmable(),
            Ok(SkipId(7)),
            "selected"
        );
    }
}
