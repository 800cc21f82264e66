//! Property-based tests for casting.
//!
//! These use proptest to check the casting invariants over generated raw values.

use envsetting::{CoercionRegistry, Value, ValueCaster, VarOptions};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn falsey_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("0".to_string()),
        "(?i)(false|no|off|disable|disabled)",
    ]
}

// Words that never match the default falsey pattern.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("not falsey", |s| {
        !matches!(s.as_str(), "false" | "no" | "off" | "disable" | "disabled")
    })
}

fn padding() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn cast(raw: &str, options: &VarOptions) -> Value {
    let registry = CoercionRegistry::new();
    ValueCaster::new(&registry).cast(raw, options).unwrap()
}

proptest! {
    /// Property: whitespace around commas never changes the list.
    #[test]
    fn list_ignores_whitespace_around_commas(
        items in prop::collection::vec((padding(), word_strategy(), padding()), 1..6)
    ) {
        let raw = items
            .iter()
            .map(|(before, word, after)| format!("{before}{word}{after}"))
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<Value> = items.iter().map(|(_, word, _)| Value::from(word.as_str())).collect();

        prop_assert_eq!(cast(&raw, &VarOptions::new().class("list")), Value::List(expected));
    }

    /// Property: integer lists keep order and values.
    #[test]
    fn integer_list_preserves_order(numbers in prop::collection::vec(any::<i64>(), 0..8)) {
        let raw = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
        let expected = Value::List(numbers.iter().copied().map(Value::Int).collect());

        prop_assert_eq!(cast(&raw, &VarOptions::new().class("list").of("integer")), expected);
    }

    /// Property: every falsey spelling casts to `false`.
    #[test]
    fn falsey_strings_are_false(raw in falsey_strategy()) {
        prop_assert_eq!(cast(&raw, &VarOptions::new().class("boolean")), Value::Bool(false));
        prop_assert_eq!(cast(&raw, &VarOptions::new()), Value::Bool(false));
    }

    /// Property: non-falsey strings are `true` as booleans and unchanged under the default coercion.
    #[test]
    fn other_strings_are_true_or_preserved(raw in word_strategy()) {
        prop_assert_eq!(cast(&raw, &VarOptions::new().class("boolean")), Value::Bool(true));
        prop_assert_eq!(cast(&raw, &VarOptions::new()), Value::from(raw.as_str()));
    }

    /// Property: integers survive a trip through their string form.
    #[test]
    fn integers_parse_back(n in any::<i64>(), before in padding(), after in padding()) {
        let raw = format!("{before}{n}{after}");
        prop_assert_eq!(cast(&raw, &VarOptions::new().class("integer")), Value::Int(n));
    }
}
