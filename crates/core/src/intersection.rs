//! Viewport intersection change events.

use crate::section::SectionId;
use serde::{Deserialize, Serialize};

/// One section's visibility change within an observation callback batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Section whose visibility changed
    pub id: SectionId,

    /// Fraction of the section's area visible within the viewport (0.0-1.0)
    pub ratio: f32,

    /// Whether the section currently intersects the viewport
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Create an entry for a section that intersects the viewport.
    pub fn visible(id: impl Into<SectionId>, ratio: f32) -> Self {
        Self {
            id: id.into(),
            ratio,
            is_intersecting: true,
        }
    }

    /// Create an entry for a section that left the viewport.
    pub fn hidden(id: impl Into<SectionId>) -> Self {
        Self {
            id: id.into(),
            ratio: 0.0,
            is_intersecting: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_entry() {
        let entry = IntersectionEntry::visible("projects", 0.75);
        assert!(entry.is_intersecting);
        assert_eq!(entry.ratio, 0.75);
        assert_eq!(entry.id.as_str(), "projects");
    }

    #[test]
    fn test_hidden_entry_has_zero_ratio() {
        let entry = IntersectionEntry::hidden("about");
        assert!(!entry.is_intersecting);
        assert_eq!(entry.ratio, 0.0);
    }
}
