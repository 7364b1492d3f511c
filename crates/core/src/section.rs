//! Section identities for navigation destinations.

use serde::{Deserialize, Serialize};

/// Identifier for a page section.
///
/// Stable for the page's lifetime and unique within one navigation's
/// section list. Matches the anchor id of the section element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A named, boundable area of the page corresponding to one navigation
/// destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id of the section element
    pub id: SectionId,

    /// Label shown in the navigation bar
    pub label: String,
}

impl Section {
    /// Create a new section.
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The portfolio page's section list, in page order.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("about", "About"),
        Section::new("projects", "Projects"),
        Section::new("music", "Music"),
        Section::new("writing", "Writing"),
        Section::new("education", "Education"),
        Section::new("contact", "Contact"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_display_matches_anchor() {
        let id = SectionId::new("about");
        assert_eq!(id.to_string(), "about");
        assert_eq!(id.as_str(), "about");
    }

    #[test]
    fn test_section_id_serde_transparent() {
        let id: SectionId = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(id, SectionId::from("contact"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"contact\"");
    }

    #[test]
    fn test_default_sections_order_and_uniqueness() {
        let sections = default_sections();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].id, SectionId::from("about"));
        assert_eq!(sections[5].id, SectionId::from("contact"));

        let mut ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
