use crate::section::Section;

/// Format a section tree as pretty-printed JSON.
pub fn format_json(section: &Section) -> String {
    serde_json::to_string_pretty(section).unwrap_or_else(|_| "{}".to_string())
}
