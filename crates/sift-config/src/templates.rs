//! Configuration template for `sift init`.
//!
//! The template is stored as a valid TOML file and returned as a commented-out
//! example configuration.

/// Configuration template (valid TOML).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the configuration template as a commented-out example.
pub fn config_template() -> String {
    comment_template(TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_config;

    #[test]
    fn template_parses_as_valid_toml() {
        let result = parse_config(TEMPLATE);
        assert!(result.is_ok(), "template failed to parse: {result:?}");
    }

    #[test]
    fn commented_template_sets_nothing() {
        let config = parse_config(&config_template()).unwrap();
        assert!(config.root.is_none());
        assert!(config.matching.is_none());
    }

    #[test]
    fn comment_template_preserves_existing_comments() {
        let input = "# This is a comment\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# This is a comment\n# key = \"value\"\n");
    }

    #[test]
    fn comment_template_handles_section_headers() {
        let input = "[section]\n\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# [section]\n\n# key = \"value\"\n");
    }
}
