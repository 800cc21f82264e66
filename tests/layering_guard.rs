//! Layering guardrails to keep `envsetting_core` dependency-free.
//!
//! The vocabulary crate is shared by the runtime and the derive macro, so it must stay pure. This test scans its
//! `Cargo.toml` and fails if anything appears in `[dependencies]`.

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/envsetting_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if in_dependencies {
                break;
            }
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if !line_no_comment.is_empty() {
            panic!("`envsetting_core` must not have dependencies, found: {line_no_comment}");
        }
    }
}

#[test]
fn runtime_does_not_depend_on_derive_internals() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        !manifest.contains("\nsyn ") && !manifest.contains("\nsyn="),
        "`syn` belongs to `envsetting_derive`, not the runtime crate"
    );
}
