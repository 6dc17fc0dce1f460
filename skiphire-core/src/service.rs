//! Browsing session combining catalog, filter criteria, and selection.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::filter::{FilterCriteria, filter_catalog};
use crate::model::{Catalog, SkipId, SkipOption};
use crate::ports::{CatalogError, CatalogSource, ConfirmHook};
use crate::selection::{Selection, SelectionError};
use crate::workflow::Confirmation;

/// Per-user state for the skip selection step.
///
/// Filtering and selection are independent: changing the criteria never
/// clears a selection, even when the selected option is no longer visible.
pub struct BrowseSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    selection: Selection,
    hook: Arc<dyn ConfirmHook>,
}

impl BrowseSession {
    /// Start a session over an already loaded catalog with default criteria.
    #[must_use]
    pub fn new(catalog: Catalog, hook: Arc<dyn ConfirmHook>) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            selection: Selection::Unselected,
            hook,
        }
    }

    /// Load the catalog from `source` and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the source fails or any record is invalid.
    pub async fn load(
        source: &dyn CatalogSource,
        hook: Arc<dyn ConfirmHook>,
    ) -> Result<Self, CatalogError> {
        let origin = source.describe();
        let catalog = source
            .load()
            .await
            .and_then(Catalog::new)
            .inspect_err(|err| warn!(%origin, error = %err, "catalog rejected"))?;
        info!(%origin, options = catalog.len(), "catalog loaded");
        Ok(Self::new(catalog, hook))
    }

    /// The shared, read-only catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current filter criteria.
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria wholesale.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "criteria changed");
        self.criteria = criteria;
    }

    /// Restore the default criteria.
    pub fn reset_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Options passing the current criteria, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&SkipOption> {
        filter_catalog(&self.catalog, &self.criteria)
    }

    /// Current selection state.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected option, whether or not it is currently visible.
    #[must_use]
    pub fn selected(&self) -> Option<&SkipOption> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    /// Toggle selection of `option`, resolved by id against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOption`] when the option is not in the catalog.
    pub fn select(&mut self, option: &SkipOption) -> Result<(), SelectionError> {
        self.select_id(option.id)
    }

    /// Toggle selection of the option with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownOption`] when `id` is not in the catalog.
    pub fn select_id(&mut self, id: SkipId) -> Result<(), SelectionError> {
        if self.catalog.get(id).is_none() {
            return Err(SelectionError::UnknownOption(id));
        }
        self.selection.select_id(id);
        debug!(selection = ?self.selection, "selection changed");
        Ok(())
    }

    /// Clear the selection.
    pub fn reset_selection(&mut self) {
        self.selection.reset();
        debug!("selection cleared");
    }

    /// Whether confirm is currently allowed.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.selected().is_some()
    }

    /// Confirm the selected option and notify the hook.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NothingSelected`] when nothing is selected and
    /// [`SelectionError::UnknownOption`] when the selected id is not in the catalog.
    pub fn confirm(&self) -> Result<Confirmation, SelectionError> {
        let id = self.selection.confirmable()?;
        let option = self
            .catalog
            .get(id)
            .ok_or(SelectionError::UnknownOption(id))?;
        let confirmation = Confirmation::new(option.clone());
        info!(
            id = %option.id,
            size = option.size,
            next = %confirmation.next_step,
            "skip confirmed"
        );
        self.hook.confirmed(&confirmation);
        Ok(confirmation)
    }
}
