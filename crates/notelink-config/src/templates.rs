//! Configuration templates for `notelink init`.
//!
//! Templates are kept as valid TOML and returned as commented-out example
//! configurations so a fresh file never silently points at a wrong vault.

/// Default local configuration template (valid TOML).
const LOCAL_TEMPLATE: &str = r#"[vault]
path = "notes"
include = ["**/*.md", "**/*.markdown"]
exclude = ["templates/**"]

[scan]
preview_context = 20
"#;

/// Global configuration template (valid TOML).
const GLOBAL_TEMPLATE: &str = r#"[vault]
path = "~/notes"
include = ["**/*.md", "**/*.markdown"]

[scan]
preview_context = 20
"#;

/// Returns the local configuration template as a commented-out example.
pub fn local_template() -> String {
    comment_template(LOCAL_TEMPLATE)
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(GLOBAL_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment,
/// non-empty lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
