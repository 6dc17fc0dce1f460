//! Catalog source backed by the built-in skip list.

use std::sync::Arc;

use async_trait::async_trait;

use skiphire_core::{
    model::{SkipId, SkipOption},
    ports::{CatalogError, CatalogSource},
};

const POSTCODE: &str = "NR32";
const AREA: &str = "Lowestoft";
const VAT: f64 = 20.0;
const HIRE_PERIOD_DAYS: u32 = 14;

/// Raw row of the built-in list: id, size, price before VAT, road, heavy waste,
/// transport, per tonne.
type Row = (u64, u32, f64, bool, bool, Option<f64>, Option<f64>);

const ROWS: [Row; 9] = [
    (17_933, 4, 278.0, true, true, None, None),
    (17_934, 6, 305.0, true, true, None, None),
    (17_935, 8, 375.0, true, true, None, None),
    (17_936, 10, 400.0, false, true, None, None),
    (17_937, 12, 439.0, false, true, None, None),
    (17_938, 14, 470.0, false, false, None, None),
    (17_939, 16, 496.0, false, false, None, None),
    (15_124, 20, 992.0, false, false, Some(248.0), Some(248.0)),
    (15_125, 40, 990.0, false, false, Some(248.0), Some(248.0)),
];

/// Source returning the compiled-in skip list.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Create the source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for EmbeddedSource {
    fn describe(&self) -> String {
        format!("built-in catalog ({AREA} {POSTCODE})")
    }

    async fn load(&self) -> Result<Vec<SkipOption>, CatalogError> {
        Ok(builtin_options())
    }
}

/// The built-in options in catalog order.
#[must_use]
pub fn builtin_options() -> Vec<SkipOption> {
    ROWS.into_iter().map(option_from_row).collect()
}

fn option_from_row(row: Row) -> SkipOption {
    let (
        id,
        size,
        price_before_vat,
        allowed_on_road,
        allows_heavy_waste,
        transport_cost,
        per_tonne_cost,
    ) = row;
    SkipOption {
        id: SkipId(id),
        size,
        price_before_vat,
        vat: VAT,
        hire_period_days: HIRE_PERIOD_DAYS,
        allowed_on_road,
        allows_heavy_waste,
        transport_cost,
        per_tonne_cost,
        postcode: Some(POSTCODE.to_owned()),
        area: Some(AREA.to_owned()),
    }
}

/// Build the shared source handle.
#[must_use]
pub fn source() -> Arc<dyn CatalogSource> {
    Arc::new(EmbeddedSource::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skiphire_core::Catalog;

    #[test]
    fn builtin_list_is_a_valid_catalog() {
        let catalog = Catalog::new(builtin_options()).expect("built-in list is valid");
        assert_eq!(catalog.len(), ROWS.len(), "every row becomes an option");
    }

    #[test]
    fn sizes_span_the_default_range() {
        let options = builtin_options();
        let sizes: Vec<u32> = options.iter().map(|opt| opt.size).collect();
        assert_eq!(sizes, vec![4, 6, 8, 10, 12, 14, 16, 20, 40], "ascending sizes");
    }

    #[test]
    fn only_large_skips_include_transport() {
        for option in builtin_options() {
            assert_eq!(
                option.transport_included(),
                option.size >= 20,
                "size {}",
                option.size
            );
        }
    }

    #[test]
    fn per_tonne_cost_comes_from_its_own_column() {
        let row: Row = (1, 20, 900.0, false, false, Some(100.0), Some(35.5));
        let option = option_from_row(row);
        assert_eq!(option.transport_cost, Some(100.0), "transport column");
        assert_eq!(option.per_tonne_cost, Some(35.5), "per tonne column");

        let no_rate: Row = (2, 20, 900.0, false, false, Some(100.0), None);
        assert_eq!(option_from_row(no_rate).per_tonne_cost, None, "rate absent");
    }
}
