//! Filter criteria and the predicate deciding which options are shown.

use serde::{Deserialize, Serialize};

use crate::model::{Catalog, SkipOption};
use crate::pricing::total_price;

/// Default upper bound on the VAT-inclusive price.
pub const DEFAULT_MAX_PRICE: f64 = 1500.0;
/// Default smallest size shown, in yards.
pub const DEFAULT_MIN_SIZE: u32 = 4;
/// Default largest size shown, in yards.
pub const DEFAULT_MAX_SIZE: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// User-chosen filter bounds and flags.
///
/// The boolean flags only ever restrict: `true` requires the capability,
/// `false` places no restriction on that dimension.
pub struct FilterCriteria {
    /// Only show skips that may be placed on a road.
    pub allowed_on_road: bool,
    /// Only show skips that accept heavy waste.
    pub allows_heavy_waste: bool,
    /// Inclusive upper bound on the total price including VAT.
    pub max_price: f64,
    /// Inclusive lower bound on size in yards.
    pub min_size: u32,
    /// Inclusive upper bound on size in yards.
    pub max_size: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            allowed_on_road: false,
            allows_heavy_waste: false,
            max_price: DEFAULT_MAX_PRICE,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl FilterCriteria {
    /// Whether these criteria are the defaults.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Decide whether a single option passes the criteria.
///
/// An inverted size range (`min_size > max_size`) matches nothing.
#[must_use]
pub fn matches(option: &SkipOption, criteria: &FilterCriteria) -> bool {
    (!criteria.allowed_on_road || option.allowed_on_road)
        && (!criteria.allows_heavy_waste || option.allows_heavy_waste)
        && total_price(option) <= criteria.max_price
        && option.size >= criteria.min_size
        && option.size <= criteria.max_size
}

/// All catalog options passing the criteria, in catalog order.
#[must_use]
pub fn filter_catalog<'catalog>(
    catalog: &'catalog Catalog,
    criteria: &FilterCriteria,
) -> Vec<&'catalog SkipOption> {
    catalog
        .options()
        .iter()
        .filter(|option| matches(option, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkipId;

    fn option(id: u64, size: u32, price: f64, road: bool, heavy: bool) -> SkipOption {
        SkipOption {
            id: SkipId(id),
            size,
            price_before_vat: price,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: road,
            allows_heavy_waste: heavy,
            transport_cost: None,
            per_tonne_cost: None,
            postcode: None,
            area: None,
        }
    }

    fn scenario_catalog() -> Catalog {
        Catalog::new(vec![option(1, 4, 200.0, true, false)]).expect("valid catalog")
    }

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            option(10, 4, 278.0, true, true),
            option(11, 6, 305.0, true, true),
            option(12, 8, 375.0, true, false),
            option(13, 10, 400.0, false, true),
            option(14, 12, 439.0, true, false),
            option(15, 14, 470.0, false, false),
            option(16, 16, 496.0, false, true),
            option(17, 20, 992.0, false, false),
            option(18, 40, 990.0, false, false),
        ])
        .expect("valid catalog")
    }

    fn ids(found: &[&SkipOption]) -> Vec<u64> {
        found.iter().map(|opt| opt.id.0).collect()
    }

    #[test]
    fn defaults_match_documented_tuple() {
        let criteria = FilterCriteria::default();
        assert!(!criteria.allowed_on_road, "road flag off");
        assert!(!criteria.allows_heavy_waste, "heavy flag off");
        assert_eq!(criteria.min_size, 4, "min size");
        assert_eq!(criteria.max_size, 40, "max size");
        assert!((criteria.max_price - 1500.0).abs() < f64::EPSILON, "max price");
        assert!(criteria.is_default(), "is_default");
    }

    #[test]
    fn default_criteria_keep_scenario_option() {
        let catalog = scenario_catalog();
        let found = filter_catalog(&catalog, &FilterCriteria::default());
        assert_eq!(ids(&found), vec![1], "240 <= 1500 and 4 in [4, 40]");
    }

    #[test]
    fn price_cap_below_total_excludes() {
        let catalog = scenario_catalog();
        let criteria = FilterCriteria {
            max_price: 100.0,
            ..FilterCriteria::default()
        };
        assert!(filter_catalog(&catalog, &criteria).is_empty(), "240 > 100");
    }

    #[test]
    fn price_cap_compares_total_not_base() {
        let catalog = scenario_catalog();
        let criteria = FilterCriteria {
            max_price: 220.0,
            ..FilterCriteria::default()
        };
        assert!(
            filter_catalog(&catalog, &criteria).is_empty(),
            "base 200 fits but total 240 does not"
        );
    }

    #[test]
    fn heavy_waste_flag_excludes_incapable() {
        let catalog = scenario_catalog();
        let criteria = FilterCriteria {
            allows_heavy_waste: true,
            ..FilterCriteria::default()
        };
        assert!(filter_catalog(&catalog, &criteria).is_empty(), "heavy waste not accepted");
    }

    #[test]
    fn flags_off_never_exclude() {
        let catalog = mixed_catalog();
        let found = filter_catalog(&catalog, &FilterCriteria::default());
        assert_eq!(found.len(), catalog.len(), "off flags do not filter for false");
    }

    #[test]
    fn both_flags_require_both_capabilities() {
        let catalog = mixed_catalog();
        let criteria = FilterCriteria {
            allowed_on_road: true,
            allows_heavy_waste: true,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_catalog(&catalog, &criteria)), vec![10, 11], "road and heavy");
    }

    #[test]
    fn size_bounds_are_inclusive() {
        let catalog = mixed_catalog();
        let criteria = FilterCriteria {
            min_size: 8,
            max_size: 12,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_catalog(&catalog, &criteria)), vec![12, 13, 14], "8..=12");
    }

    #[test]
    fn inverted_size_range_matches_nothing() {
        let catalog = mixed_catalog();
        let criteria = FilterCriteria {
            min_size: 20,
            max_size: 10,
            ..FilterCriteria::default()
        };
        assert!(filter_catalog(&catalog, &criteria).is_empty(), "min > max");
    }

    #[test]
    fn result_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            option(5, 20, 100.0, true, true),
            option(2, 4, 100.0, true, true),
            option(9, 12, 100.0, false, true),
            option(1, 8, 100.0, true, true),
        ])
        .expect("valid catalog");
        let criteria = FilterCriteria {
            allowed_on_road: true,
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&filter_catalog(&catalog, &criteria)), vec![5, 2, 1], "no re-sorting");
    }

    #[test]
    fn tightening_never_grows_the_result() {
        let catalog = mixed_catalog();
        let base = FilterCriteria::default();
        let base_len = filter_catalog(&catalog, &base).len();

        let tightened = [
            FilterCriteria { max_price: 600.0, ..base },
            FilterCriteria { max_price: 0.0, ..base },
            FilterCriteria { min_size: 10, ..base },
            FilterCriteria { max_size: 12, ..base },
            FilterCriteria { allowed_on_road: true, ..base },
            FilterCriteria { allows_heavy_waste: true, ..base },
        ];

        for criteria in tightened {
            let len = filter_catalog(&catalog, &criteria).len();
            assert!(len <= base_len, "{criteria:?} grew the result");
            // Stacking a further restriction on top must not grow it either.
            let stacked = FilterCriteria {
                max_price: criteria.max_price.min(500.0),
                ..criteria
            };
            assert!(filter_catalog(&catalog, &stacked).len() <= len, "{stacked:?}");
        }
    }
}
