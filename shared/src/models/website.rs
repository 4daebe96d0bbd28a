//! Website Builder Model
//!
//! Label overrides and section toggles of the public wedding website.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-section text overrides: `section id -> label key -> value`
///
/// Ordered maps, so equality is structural regardless of insertion order.
pub type LabelMap = BTreeMap<String, BTreeMap<String, String>>;

/// Section toggle / ordering entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub enabled: bool,
    pub order: i32,
}

impl SectionConfig {
    pub fn new(id: impl Into<String>, enabled: bool, order: i32) -> Self {
        Self {
            id: id.into(),
            enabled,
            order,
        }
    }
}

/// Website data as returned by the wedding API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteContent {
    #[serde(default)]
    pub website_labels: LabelMap,
    #[serde(default)]
    pub website_sections: Vec<SectionConfig>,
}

/// Partial website update (PATCH body)
///
/// Only the halves that changed are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsitePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_labels: Option<LabelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_sections: Option<Vec<SectionConfig>>,
}

impl WebsitePatch {
    pub fn is_empty(&self) -> bool {
        self.website_labels.is_none() && self.website_sections.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_skips_unchanged_halves() {
        let mut labels = LabelMap::new();
        labels
            .entry("hero".into())
            .or_default()
            .insert("title".into(), "We're getting married".into());

        let patch = WebsitePatch {
            website_labels: Some(labels),
            website_sections: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(
            json,
            r#"{"websiteLabels":{"hero":{"title":"We're getting married"}}}"#
        );
        assert!(WebsitePatch::default().is_empty());
    }

    #[test]
    fn test_content_defaults_missing_halves() {
        let content: WebsiteContent =
            serde_json::from_str(r#"{"websiteSections":[{"id":"rsvp","enabled":true,"order":2}]}"#)
                .unwrap();
        assert!(content.website_labels.is_empty());
        assert_eq!(content.website_sections, vec![SectionConfig::new("rsvp", true, 2)]);
    }
}
