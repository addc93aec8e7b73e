//! Property-based tests for hooklog using proptest

use hooklog::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Levels compare exactly as their values do, whatever they are named
    #[test]
    fn test_level_ordering_follows_value(
        name_a in "[A-Z]{1,10}",
        name_b in "[A-Z]{1,10}",
        value_a in -1000i32..1000,
        value_b in -1000i32..1000,
    ) {
        let a = Level::new(name_a, value_a);
        let b = Level::new(name_b, value_b);

        prop_assert_eq!(a >= b, value_a >= value_b);
        prop_assert_eq!(a > b, value_a > value_b);
        prop_assert_eq!(a <= b, value_a <= value_b);
        prop_assert_eq!(a < b, value_a < value_b);
        prop_assert_eq!(a == b, value_a == value_b);
    }

    /// Equal values make interchangeable levels regardless of name
    #[test]
    fn test_level_name_is_informational(
        name_a in "[A-Z]{1,10}",
        name_b in "[A-Z]{1,10}",
        value in -1000i32..1000,
    ) {
        let a = Level::new(name_a.clone(), value);
        let b = Level::new(name_b, value);

        prop_assert_eq!(&a, &b);
        prop_assert!(a >= b && a <= b);
        prop_assert_eq!(a.name(), name_a.as_str());
    }

    /// Display always prints the name verbatim
    #[test]
    fn test_level_display(name in "[A-Za-z]{1,12}", value in -1000i32..1000) {
        let level = Level::new(name.clone(), value);
        prop_assert_eq!(level.to_string(), name);
    }

    /// Predefined level names parse case-insensitively to the same rank
    #[test]
    fn test_level_parse_case_insensitive(use_lower in any::<bool>()) {
        for name in ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"] {
            let input = if use_lower { name.to_lowercase() } else { name.to_string() };
            let parsed: Level = input.parse().expect("predefined name parses");
            prop_assert_eq!(parsed.name(), name);
        }
    }
}

// ============================================================================
// Logger dispatch properties
// ============================================================================

/// Recording handler used to count dispatches
struct Recorder {
    level: Level,
    sink: Vec<u8>,
}

impl Handler for Recorder {
    fn threshold(&self) -> &Level {
        &self.level
    }

    fn sink(&mut self) -> &mut dyn std::io::Write {
        &mut self.sink
    }

    fn format(&self, entry: &Entry) -> Result<String> {
        Ok(entry.message.clone())
    }
}

proptest! {
    /// A handler writes exactly when the entry level reaches its threshold
    /// and the logger has the level enabled
    #[test]
    fn test_write_iff_enabled_and_above_threshold(
        entry_value in 1i32..=5,
        threshold_value in 1i32..=5,
        enabled in proptest::collection::vec(1i32..=5, 0..5),
    ) {
        use parking_lot::Mutex;
        use std::sync::Arc;

        let level = Level::new("L", entry_value);
        let handler = Arc::new(Mutex::new(Recorder {
            level: Level::new("T", threshold_value),
            sink: Vec::new(),
        }));

        let mut logger = Logger::new("prop");
        logger.set_levels(enabled.iter().map(|v| Level::new("E", *v)));
        logger.register_shared(handler.clone());

        logger.log(level, "m", None).expect("dispatch never fails here");

        let expect_write = enabled.contains(&entry_value) && entry_value >= threshold_value;
        let written = !handler.lock().sink.is_empty();
        prop_assert_eq!(written, expect_write);
    }
}

// ============================================================================
// Fields round-trip
// ============================================================================

proptest! {
    /// Field maps survive JSON serialization unchanged
    #[test]
    fn test_fields_json_roundtrip(
        entries in proptest::collection::btree_map(
            "[a-z_]{1,8}",
            prop_oneof![
                any::<i64>().prop_map(FieldValue::Int),
                any::<bool>().prop_map(FieldValue::Bool),
                "[ -~]{0,16}".prop_map(FieldValue::String),
            ],
            0..6,
        )
    ) {
        let fields: Fields = entries.clone().into_iter().collect();
        let json = serde_json::to_string(&fields).unwrap();
        let back: Fields = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, fields);
    }
}
