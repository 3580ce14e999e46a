use serde::{Deserialize, Serialize};

/// Format of `created_at`. Sorts lexically in chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub id: i64,
    pub text: String,
    pub description: Option<String>,
    pub tags: Option<String>, // freeform, never parsed
    pub created_at: String,   // YYYY-MM-DD HH:MM:SS, local time
}

impl Idea {
    /// Fields in export column order: id, text, description, tags, created_at
    pub fn export_record(&self) -> [String; 5] {
        [
            self.id.to_string(),
            self.text.clone(),
            self.description.clone().unwrap_or_default(),
            self.tags.clone().unwrap_or_default(),
            self.created_at.clone(),
        ]
    }

    /// Whether `keyword` occurs verbatim in the text, tags or description
    pub fn matches(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
            || self.tags.as_deref().is_some_and(|t| t.contains(keyword))
            || self.description.as_deref().is_some_and(|d| d.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Idea {
        Idea {
            id: 7,
            text: "Learn Rust".to_string(),
            description: None,
            tags: Some("programming,learning".to_string()),
            created_at: "2025-01-02 03:04:05".to_string(),
        }
    }

    #[test]
    fn export_record_renders_missing_fields_as_empty() {
        let record = sample().export_record();
        assert_eq!(
            record,
            [
                "7".to_string(),
                "Learn Rust".to_string(),
                String::new(),
                "programming,learning".to_string(),
                "2025-01-02 03:04:05".to_string(),
            ]
        );
    }

    #[test]
    fn matches_is_case_sensitive() {
        let idea = sample();
        assert!(idea.matches("Rust"));
        assert!(idea.matches("learning"));
        assert!(!idea.matches("rust"));
        assert!(!idea.matches("book"));
    }
}
