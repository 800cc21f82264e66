//! Casting through declared options: primitives, collections, booleans, the default coercion and custom types.

mod common;

use std::collections::{BTreeSet, HashMap};

use common::settings;
use envsetting::{ErrorKind, Symbol, Value, ValueMap, VarOptions};

const TRUTHY: &[&str] = &["true", "on", "yes", "yo", "yup", "anything"];
const FALSEY: &[&str] = &["false", "no", "off", "disable", "disabled", "0", "", "FALSE", "Off"];

fn symbol_map(pairs: &[(&str, Value)]) -> Value {
    Value::Map(
        pairs
            .iter()
            .map(|(k, v)| (Value::symbol(*k), v.clone()))
            .collect::<ValueMap>(),
    )
}

#[test]
fn casts_integers() {
    for raw in ["0", "1", "10", "-42", "-55"] {
        let (_env, settings) = settings(&[("INTEGER", raw)]);
        settings.use_var("INTEGER", VarOptions::new().class("Integer")).unwrap();

        assert_eq!(settings.value_as::<i64>("integer").unwrap(), raw.parse::<i64>().unwrap());
    }
}

#[test]
fn casts_floats() {
    for raw in ["0.1", "1.3", "10", "-42.3", "-55"] {
        let (_env, settings) = settings(&[("FLOAT", raw)]);
        settings.use_var("FLOAT", VarOptions::new().class("Float")).unwrap();

        let value = settings.value("float").unwrap();
        assert_eq!(value, Value::Float(raw.parse::<f64>().unwrap()));
    }
}

#[test]
fn casts_symbols() {
    let (_env, settings) = settings(&[("SYMBOL", "symbol")]);
    settings.use_var("SYMBOL", VarOptions::new().class("Symbol")).unwrap();

    assert_eq!(settings.value_as::<Symbol>("symbol").unwrap(), Symbol::new("symbol"));
}

#[test]
fn casts_lists_ignoring_whitespace_around_commas() {
    let (_env, settings) = settings(&[("ARRAY", "one,two , three, four")]);
    settings.use_var("ARRAY", VarOptions::new().class("Array")).unwrap();

    assert_eq!(
        settings.value_as::<Vec<String>>("array").unwrap(),
        vec!["one", "two", "three", "four"]
    );
}

#[test]
fn list_read_is_always_a_list() {
    let (_env, settings) = settings(&[("ARRAY", "one,two , three, four")]);
    settings.use_var("ARRAY", VarOptions::new().class("Array")).unwrap();

    for _ in 0..2 {
        let value = settings.value("array").unwrap();
        assert_eq!(value.as_list().map(<[Value]>::len), Some(4));
        settings.clear_cache();
    }
}

#[test]
fn casts_lists_of_integers_and_floats() {
    let (_env, settings) = settings(&[("INTEGERS", "0,1,10,-42,-55"), ("FLOATS", "0.1,1.3,10,-42.3,-55")]);
    settings
        .use_var("INTEGERS", VarOptions::new().class("Array").of("Integer"))
        .unwrap();
    settings
        .use_var("FLOATS", VarOptions::new().class("Array").of("Float"))
        .unwrap();

    assert_eq!(
        settings.value_as::<Vec<i64>>("integers").unwrap(),
        vec![0, 1, 10, -42, -55]
    );
    assert_eq!(
        settings.value_as::<Vec<f64>>("floats").unwrap(),
        vec![0.1, 1.3, 10.0, -42.3, -55.0]
    );
}

#[test]
fn casts_maps_with_symbol_keys() {
    let (_env, settings) = settings(&[("HASH_VAR", "one: two, three: four")]);
    settings.use_var("HASH_VAR", VarOptions::new().class("Hash")).unwrap();

    assert_eq!(
        settings.value("hash_var").unwrap(),
        symbol_map(&[("one", Value::from("two")), ("three", Value::from("four"))])
    );
}

#[test]
fn casts_maps_of_integers() {
    let (_env, settings) = settings(&[("INT_HASH", "one: 111, two: 222")]);
    settings
        .use_var("INT_HASH", VarOptions::new().class("Hash").of("Integer"))
        .unwrap();

    assert_eq!(
        settings.value("int_hash").unwrap(),
        symbol_map(&[("one", Value::Int(111)), ("two", Value::Int(222))])
    );
    let typed = settings.value_as::<HashMap<String, i64>>("int_hash").unwrap();
    assert_eq!(typed.get("two"), Some(&222));
}

#[test]
fn casts_maps_with_string_keys() {
    let (_env, settings) = settings(&[("STRKEY_HASH", "one: two, three: four")]);
    settings
        .use_var("STRKEY_HASH", VarOptions::new().class("Hash").keys("String"))
        .unwrap();

    let value = settings.value("strkey_hash").unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(map.get(&Value::from("one")), Some(&Value::from("two")));
    assert_eq!(map.get(&Value::from("three")), Some(&Value::from("four")));
    assert_eq!(map.get_symbol("one"), None);
}

#[test]
fn boolean_truthy_values() {
    for &raw in TRUTHY {
        let (_env, settings) = settings(&[("TRUE", raw)]);
        settings.use_var("TRUE", VarOptions::new().class("boolean")).unwrap();

        assert_eq!(settings.value("true").unwrap(), Value::Bool(true), "{raw:?}");
    }
}

#[test]
fn boolean_falsey_values() {
    for &raw in FALSEY {
        let (_env, settings) = settings(&[("FALSE", raw)]);
        settings.use_var("FALSE", VarOptions::new().class("boolean")).unwrap();

        assert_eq!(settings.value("false").unwrap(), Value::Bool(false), "{raw:?}");
    }
}

#[test]
fn default_coercion_turns_falsey_into_false() {
    for &raw in FALSEY {
        let (_env, settings) = settings(&[("FALSE", raw)]);
        settings.use_var("FALSE", VarOptions::new()).unwrap();

        assert_eq!(settings.value("false").unwrap(), Value::Bool(false), "{raw:?}");
    }
}

#[test]
fn default_coercion_keeps_other_strings_unchanged() {
    let (_env, settings) = settings(&[("GREETING", "  Hello, world  ")]);
    settings.use_var("GREETING", VarOptions::new()).unwrap();

    assert_eq!(settings.value("greeting").unwrap(), Value::from("  Hello, world  "));
}

#[test]
fn explicit_string_class_keeps_falsey_strings() {
    for &raw in FALSEY {
        let (_env, settings) = settings(&[("FALSE", raw)]);
        settings.use_var("FALSE", VarOptions::new().class("String")).unwrap();

        assert_eq!(settings.value("false").unwrap(), Value::from(raw));
    }
}

#[test]
fn malformed_integer_is_a_cast_failure() {
    let (_env, settings) = settings(&[("PORT", "eighty")]);
    settings.use_var("PORT", VarOptions::new().class("integer")).unwrap();

    let err = settings.value("port").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CastFailure);
    assert!(err.to_string().starts_with("cannot cast 'eighty' to integer"));
}

#[test]
fn unknown_class_fails_at_read_time() {
    let (_env, settings) = settings(&[("SET", "1,2")]);
    settings.use_var("SET", VarOptions::new().class("Set")).unwrap();

    assert_eq!(settings.value("set").unwrap_err().kind(), ErrorKind::UnknownType);
}

#[test]
fn custom_set_type_built_from_list_coercion() {
    let (_env, settings) = settings(&[("NUMBER_SET", "1,3,5,7,9")]);

    settings
        .config(|env| {
            env.add_class("Set", |caster, raw, options| {
                let items = caster.list(raw, options)?;
                let set: BTreeSet<i64> = items
                    .as_list()
                    .unwrap_or_default()
                    .iter()
                    .filter_map(Value::as_int)
                    .collect();
                Ok(Value::custom(set))
            });
            env.use_var("NUMBER_SET", VarOptions::new().class("Set").of("Integer"))
        })
        .unwrap();

    let value = settings.value("number_set").unwrap();
    let expected: BTreeSet<i64> = [1, 3, 5, 7, 9].into_iter().collect();
    assert_eq!(value.downcast_ref::<BTreeSet<i64>>(), Some(&expected));
    assert_eq!(value, Value::custom(expected));
}

#[test]
fn custom_class_overrides_builtin() {
    let (_env, settings) = settings(&[("FLAG", "maybe")]);
    settings.add_class("Boolean", |_, raw, _| Ok(Value::Bool(raw == "maybe")));
    settings.use_var("FLAG", VarOptions::new().class("boolean")).unwrap();

    assert_eq!(settings.value("flag").unwrap(), Value::Bool(true));
}

#[test]
fn custom_class_can_shadow_a_primitive() {
    let (_env, settings) = settings(&[("PORT", "0x1F")]);
    settings.add_class("integer", |_, raw, _| {
        let digits = raw.trim_start_matches("0x");
        i64::from_str_radix(digits, 16)
            .map(Value::Int)
            .map_err(|e| envsetting::EnvSettingError::cast_failure("integer", raw, e.to_string()))
    });
    settings.use_var("PORT", VarOptions::new().class("Integer")).unwrap();

    assert_eq!(settings.value("port").unwrap(), Value::Int(31));
}
