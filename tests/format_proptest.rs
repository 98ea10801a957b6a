//! Property tests for rate formatting

use daterate::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn symbol_wraps_fixed_digits(rate in 0.0f64..1_000_000.0, places in 0u32..=6u32) {
        let fixed = format!("{:.*}", places as usize, rate);
        let before = FormatConfig {
            decimal_places: places,
            ..FormatConfig::default()
        };
        prop_assert_eq!(format_rate(rate, &before), format!("${}", fixed));

        let after = FormatConfig {
            symbol_position: SymbolPosition::After,
            ..before
        };
        prop_assert_eq!(format_rate(rate, &after), format!("{}$", fixed));
    }

    #[test]
    fn custom_separator_replaces_decimal_point(rate in 0.0f64..10_000.0) {
        let config = FormatConfig {
            decimal_separator: ",".to_string(),
            ..FormatConfig::default()
        };
        let formatted = format_rate(rate, &config);
        prop_assert!(!formatted.contains('.'));
        prop_assert!(formatted.contains(','));
    }

    #[test]
    fn zero_decimal_places_emits_no_fraction(rate in 0.0f64..10_000.0) {
        let config = FormatConfig {
            decimal_places: 0,
            ..FormatConfig::default()
        };
        prop_assert!(!format_rate(rate, &config).contains('.'));
    }
}
