use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::catalog::{Gradient, ProjectCategory, ProjectIcon};

/// Id value marking a project that has not been persisted yet.
pub const UNSAVED_PROJECT_ID: i64 = 0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Immutable once assigned; 0 means "new, not yet saved".
    pub id: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: String,
    pub full_description: String,
    /// Technology tags in display order. Duplicates are allowed.
    pub stack: Vec<String>,
    pub category: ProjectCategory,
    pub icon: ProjectIcon,
    pub gradient: Gradient,
    /// Emoji glyph, or an external image URL when it starts with `http`.
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
}

impl Project {
    pub fn is_unsaved(&self) -> bool {
        self.id == UNSAVED_PROJECT_ID
    }

    /// True when `image` holds an external URL rather than an emoji glyph.
    pub fn has_image_url(&self) -> bool {
        self.image.starts_with("http")
    }

    /// Picks an id for a project being created: the creation timestamp in
    /// milliseconds, bumped past any id already taken.
    pub(crate) fn fresh_id(existing: &[Project]) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        while id == UNSAVED_PROJECT_ID || existing.iter().any(|p| p.id == id) {
            id += 1;
        }
        id
    }

    /// Appends a technology tag. Input is trimmed; blank input is ignored.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            self.stack.push(tag.to_string());
        }
    }

    /// Removes the tag at `index`; out-of-range positions are ignored.
    pub fn remove_tag(&mut self, index: usize) {
        if index < self.stack.len() {
            self.stack.remove(index);
        }
    }
}
