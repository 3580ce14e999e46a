use std::fmt;
use std::str::FromStr;

use crate::models::Idea;

const SEPARATOR_WIDTH: usize = 40;
const MISSING: &str = "N/A";

/// How result sets are laid out as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One labelled line per field, ideas separated by a rule
    #[default]
    Detailed,
    /// One line per idea
    Compact,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(ViewMode::Detailed),
            "compact" | "simple" => Ok(ViewMode::Compact),
            other => Err(format!(
                "Unknown view mode '{}' (expected 'detailed' or 'compact')",
                other
            )),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Detailed => write!(f, "Detailed"),
            ViewMode::Compact => write!(f, "Compact"),
        }
    }
}

/// Render a titled result set as plain text
pub fn render_results(title: &str, ideas: &[Idea], mode: ViewMode) -> String {
    let mut out = format!("=== {} ===\n\n", title);

    if ideas.is_empty() {
        out.push_str("No ideas found.\n");
        return out;
    }

    for idea in ideas {
        match mode {
            ViewMode::Detailed => out.push_str(&render_detailed(idea)),
            ViewMode::Compact => out.push_str(&render_compact(idea)),
        }
    }
    out
}

fn render_detailed(idea: &Idea) -> String {
    format!(
        "ID: {}\nText: {}\nDescription: {}\nTags: {}\nDate: {}\n{}\n",
        idea.id,
        idea.text,
        or_missing(&idea.description),
        or_missing(&idea.tags),
        idea.created_at,
        "-".repeat(SEPARATOR_WIDTH)
    )
}

fn render_compact(idea: &Idea) -> String {
    format!(
        "ID: {} | Text: {} | Description: {} | Tags: {} | Date: {}\n",
        idea.id,
        idea.text,
        or_missing(&idea.description),
        or_missing(&idea.tags),
        idea.created_at
    )
}

fn or_missing(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

/// Render ideas as a pretty-printed JSON array
pub fn render_json(ideas: &[Idea]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(ideas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: i64, text: &str, description: Option<&str>, tags: Option<&str>) -> Idea {
        Idea {
            id,
            text: text.to_string(),
            description: description.map(String::from),
            tags: tags.map(String::from),
            created_at: "2025-03-01 09:30:00".to_string(),
        }
    }

    #[test]
    fn detailed_view_labels_every_field() {
        let rendered = render_results(
            "All ideas",
            &[idea(1, "Learn Rust", Some("via book"), None)],
            ViewMode::Detailed,
        );
        let expected = format!(
            "=== All ideas ===\n\nID: 1\nText: Learn Rust\nDescription: via book\nTags: N/A\nDate: 2025-03-01 09:30:00\n{}\n",
            "-".repeat(40)
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn compact_view_is_one_line_per_idea() {
        let rendered = render_results(
            "Search: 'a'",
            &[
                idea(1, "Write a novel", Some(""), Some("writing")),
                idea(2, "Learn Rust", None, None),
            ],
            ViewMode::Compact,
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "ID: 1 | Text: Write a novel | Description: N/A | Tags: writing | Date: 2025-03-01 09:30:00"
        );
    }

    #[test]
    fn empty_result_has_placeholder() {
        let rendered = render_results("Search: 'x'", &[], ViewMode::Detailed);
        assert_eq!(rendered, "=== Search: 'x' ===\n\nNo ideas found.\n");
    }

    #[test]
    fn view_mode_parses_case_insensitively() {
        assert_eq!("Detailed".parse::<ViewMode>(), Ok(ViewMode::Detailed));
        assert_eq!("COMPACT".parse::<ViewMode>(), Ok(ViewMode::Compact));
        assert_eq!("Simple".parse::<ViewMode>(), Ok(ViewMode::Compact));
        assert!("grid".parse::<ViewMode>().is_err());
    }

    #[test]
    fn json_uses_named_fields() {
        let json = render_json(&[idea(3, "Idea", None, Some("t"))]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["text"], "Idea");
        assert!(value[0]["description"].is_null());
        assert_eq!(value[0]["tags"], "t");
    }
}
