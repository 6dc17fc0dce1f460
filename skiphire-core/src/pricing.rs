//! VAT-inclusive pricing shared by filtering and display.

use crate::model::SkipOption;

/// Total price of an option including VAT.
///
/// No rounding is applied; filtering compares against this exact value so a
/// displayed price and a filter decision can never disagree.
#[must_use]
pub fn total_price(option: &SkipOption) -> f64 {
    option.price_before_vat * (1.0 + option.vat / 100.0)
}

/// Render a price with two decimals for display, e.g. `£240.00`.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("£{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkipId;

    fn priced(price_before_vat: f64, vat: f64) -> SkipOption {
        SkipOption {
            id: SkipId(1),
            size: 4,
            price_before_vat,
            vat,
            hire_period_days: 7,
            allowed_on_road: true,
            allows_heavy_waste: false,
            transport_cost: None,
            per_tonne_cost: None,
            postcode: None,
            area: None,
        }
    }

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn adds_vat_percentage() {
        assert!(close(total_price(&priced(200.0, 20.0)), 240.0), "200 + 20%");
        assert!(close(total_price(&priced(278.0, 20.0)), 333.6), "278 + 20%");
    }

    #[test]
    fn zero_vat_keeps_base_price() {
        for base in [0.0, 1.0, 99.99, 1500.0] {
            assert!(close(total_price(&priced(base, 0.0)), base), "base {base}");
        }
    }

    #[test]
    fn never_below_base_price() {
        for base in [0.0, 10.0, 278.0, 992.0] {
            for vat in [0.0, 5.0, 17.5, 20.0, 100.0] {
                let option = priced(base, vat);
                assert!(
                    total_price(&option) >= option.price_before_vat,
                    "base {base} vat {vat}"
                );
            }
        }
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_price(240.0), "£240.00", "whole amount");
        assert_eq!(format_price(333.6), "£333.60", "one decimal");
        assert_eq!(format_price(1190.4), "£1190.40", "four digits");
    }
}
