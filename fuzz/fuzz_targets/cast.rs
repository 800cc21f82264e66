#![no_main]

use envsetting::{CoercionRegistry, ValueCaster, VarOptions};
use libfuzzer_sys::fuzz_target;

const TAGS: &[&str] = &["string_unless_falsey", "boolean", "symbol", "list", "map", "integer", "float", "string"];

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(raw) = std::str::from_utf8(data) {
        let registry = CoercionRegistry::new();
        let caster = ValueCaster::new(&registry);
        for tag in TAGS {
            // Errors are fine; panics are not.
            let _ = caster.cast(raw, &VarOptions::new().class(*tag));
            let _ = caster.cast(raw, &VarOptions::new().class(*tag).of("integer").keys("string"));
        }
    }
});
