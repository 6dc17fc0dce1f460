use skiphire_core::{
    FilterCriteria,
    model::SkipOption,
    service::BrowseSession,
    workflow::{BookingStep, Confirmation},
};

pub(crate) const PRICE_MIN: f64 = 200.0;
pub(crate) const PRICE_MAX: f64 = 1500.0;
pub(crate) const PRICE_STEP: f64 = 50.0;
pub(crate) const SIZE_MIN: u32 = 4;
pub(crate) const SIZE_MAX: u32 = 40;
pub(crate) const SIZE_STEP: u32 = 2;

pub(crate) struct App {
    pub session: BrowseSession,
    pub source_label: String,

    pub list_index: usize,

    pub confirmation: Option<Confirmation>,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(session: BrowseSession, source_label: String) -> Self {
        Self {
            session,
            source_label,
            list_index: 0,
            confirmation: None,
            error_message: None,
        }
    }

    pub(crate) fn active_step(&self) -> BookingStep {
        self.confirmation
            .as_ref()
            .map_or(BookingStep::SkipSelection, |confirmation| confirmation.next_step)
    }

    pub(crate) fn visible(&self) -> Vec<&SkipOption> {
        self.session.visible()
    }

    pub(crate) fn highlighted(&self) -> Option<&SkipOption> {
        self.visible().get(self.list_index).copied()
    }

    pub(crate) fn move_up(&mut self) {
        self.list_index = self.list_index.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.list_index + 1 < self.visible().len() {
            self.list_index += 1;
        }
    }

    pub(crate) fn toggle_highlighted(&mut self) {
        let Some(option) = self.highlighted().cloned() else {
            self.error_message = Some("Nothing to select with the current filters".into());
            return;
        };
        self.error_message = self
            .session
            .select(&option)
            .err()
            .map(|err| format!("Cannot select: {err}"));
    }

    pub(crate) fn clear_selection(&mut self) {
        self.error_message = None;
        self.session.reset_selection();
    }

    pub(crate) fn confirm(&mut self) {
        match self.session.confirm() {
            Ok(confirmation) => {
                self.error_message = None;
                self.confirmation = Some(confirmation);
            }
            Err(err) => {
                self.error_message = Some(format!("Cannot continue: {err}"));
            }
        }
    }

    pub(crate) fn reset_filters(&mut self) {
        self.session.reset_filters();
        self.after_filter_change();
    }

    pub(crate) fn toggle_on_road(&mut self) {
        self.update_criteria(|criteria| criteria.allowed_on_road = !criteria.allowed_on_road);
    }

    pub(crate) fn toggle_heavy_waste(&mut self) {
        self.update_criteria(|criteria| {
            criteria.allows_heavy_waste = !criteria.allows_heavy_waste;
        });
    }

    pub(crate) fn raise_max_price(&mut self) {
        self.update_criteria(|criteria| {
            criteria.max_price = (criteria.max_price + PRICE_STEP).clamp(PRICE_MIN, PRICE_MAX);
        });
    }

    pub(crate) fn lower_max_price(&mut self) {
        self.update_criteria(|criteria| {
            criteria.max_price = (criteria.max_price - PRICE_STEP).clamp(PRICE_MIN, PRICE_MAX);
        });
    }

    // The paired range control never lets the thumbs cross.
    pub(crate) fn raise_min_size(&mut self) {
        self.update_criteria(|criteria| {
            criteria.min_size = (criteria.min_size + SIZE_STEP).min(criteria.max_size);
        });
    }

    pub(crate) fn lower_min_size(&mut self) {
        self.update_criteria(|criteria| {
            criteria.min_size = criteria.min_size.saturating_sub(SIZE_STEP).max(SIZE_MIN);
        });
    }

    pub(crate) fn raise_max_size(&mut self) {
        self.update_criteria(|criteria| {
            criteria.max_size = (criteria.max_size + SIZE_STEP).min(SIZE_MAX);
        });
    }

    pub(crate) fn lower_max_size(&mut self) {
        self.update_criteria(|criteria| {
            criteria.max_size = criteria.max_size.saturating_sub(SIZE_STEP).max(criteria.min_size);
        });
    }

    fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) {
        let mut criteria = *self.session.criteria();
        change(&mut criteria);
        self.session.set_criteria(criteria);
        self.after_filter_change();
    }

    fn after_filter_change(&mut self) {
        let len = self.visible().len();
        self.list_index = self.list_index.min(len.saturating_sub(1));
    }
}
