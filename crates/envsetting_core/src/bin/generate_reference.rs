//! Print Markdown reference tables from `envsetting_core::lang` registries.
//!
//! Renders the builtin type tags and the error kinds as Markdown on stdout.
//!
//! ## Notes
//! - Redirect into `docs/reference.md` and commit the result; do not edit the generated Markdown by hand.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p envsetting_core --bin generate_reference > docs/reference.md
//! ```

use envsetting_core::lang::{errors, tags};

fn main() {
    let mut out = String::new();
    out.push_str("# envsetting reference\n\n");
    out.push_str("> Generated file. Regenerate with `cargo run -p envsetting_core --bin generate_reference`.\n\n");

    render_tags_section(&mut out);
    render_errors_section(&mut out);

    print!("{out}");
}

fn render_tags_section(out: &mut String) {
    out.push_str("## Type tags\n\n");
    out.push_str("| Id | Canonical | Aliases | Kind | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");

    for t in tags::TAGS {
        let item = &t.item;
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {:?} | {} | {} | {:?} |\n",
            item.id,
            item.canonical,
            code_list(item.aliases),
            t.kind,
            item.description,
            item.since_version.unwrap_or(""),
            item.stability,
        ));
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    for t in tags::TAGS {
        if t.item.examples.is_empty() {
            continue;
        }
        out.push_str(&format!("#### `{}`\n\n", t.item.canonical));
        for ex in t.item.examples {
            out.push_str("```sh\n");
            out.push_str(ex.code);
            out.push_str("\n```\n\n");
            if let Some(note) = ex.note {
                out.push_str(note);
                out.push_str("\n\n");
            }
        }
    }
}

fn render_errors_section(out: &mut String) {
    out.push_str("## Error kinds\n\n");
    out.push_str("| Id | Canonical | Aliases | Description |\n");
    out.push_str("|---|---|---|---|\n");

    for e in errors::ERROR_KINDS {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} |\n",
            e.id,
            e.canonical,
            code_list(e.aliases),
            e.description
        ));
    }
    out.push('\n');
}

fn code_list(spellings: &[&str]) -> String {
    spellings
        .iter()
        .map(|a| format!("`{a}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
