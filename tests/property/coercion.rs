//! Property-based tests for value coercion and row decoding

use growi_config::config::sources::database::decode_value;
use growi_config::config::ValueType;
use growi_config::store::PersistedConfigRow;
use growi_config::types::ConfigValue;
use proptest::prelude::*;

proptest! {
    #[test]
    fn boolean_true_only_for_true_or_one(raw in ".*") {
        let expected = raw.eq_ignore_ascii_case("true") || raw == "1";
        prop_assert_eq!(ValueType::Boolean.parse(&raw), ConfigValue::Bool(expected));
    }

    #[test]
    fn string_is_identity(raw in ".*") {
        prop_assert_eq!(ValueType::String.parse(&raw), ConfigValue::String(raw.clone()));
    }

    #[test]
    fn number_parses_any_i64(n in any::<i64>()) {
        prop_assert_eq!(ValueType::Number.parse(&n.to_string()), ConfigValue::from(n));
    }

    #[test]
    fn number_ignores_trailing_garbage(n in 0i64..1_000_000, suffix in "[g-wyz .]{0,8}") {
        let raw = format!("{}{}", n, suffix);
        prop_assert_eq!(ValueType::Number.parse(&raw), ConfigValue::from(n));
    }

    #[test]
    fn number_without_digits_is_sentinel(raw in "[g-z ]*") {
        prop_assert!(ValueType::Number.parse(&raw).is_invalid_number());
    }

    #[test]
    fn stored_strings_round_trip_except_empty(s in ".*") {
        let encoded = serde_json::to_string(&s).unwrap();
        let decoded = decode_value(&PersistedConfigRow::new("crowi", "k", encoded)).unwrap();
        if s.is_empty() {
            prop_assert_eq!(decoded, ConfigValue::Null);
        } else {
            prop_assert_eq!(decoded, ConfigValue::String(s));
        }
    }
}
