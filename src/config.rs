//! Editor configuration
//!
//! Every field has a default, so a host may pass a partial object (or no
//! object at all) to `createEditor`.

use serde::{Deserialize, Serialize};

use crate::drag::Footprint;
use crate::error::EditorError;
use crate::models::text_item::{FontSize, Position};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Assumed on-canvas size of every item, used for drag clamping
    pub item_footprint: Footprint,

    /// Where `addItem` places new items
    pub default_position: Position,

    /// Initial text of new items
    pub default_text: String,

    /// Initial font size of new items
    pub default_font_size: FontSize,

    /// Maximum undo depth; `None` keeps every snapshot
    pub history_limit: Option<usize>,

    /// Start with the welcome item instead of an empty canvas
    pub seed_document: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            item_footprint: Footprint::default(),
            default_position: Position::new(50.0, 50.0),
            default_text: "New Text".to_string(),
            default_font_size: FontSize::Px16,
            history_limit: None,
            seed_document: true,
        }
    }
}

impl EditorConfig {
    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{ "historyLimit": 5 }"#).unwrap();

        assert_eq!(config.history_limit, Some(5));
        assert_eq!(config.item_footprint, Footprint::new(150.0, 50.0));
        assert_eq!(config.default_text, "New Text");
        assert!(config.seed_document);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_invalid_font_size_rejected() {
        let err = EditorConfig::from_json(r#"{ "defaultFontSize": 15 }"#).unwrap_err();
        assert!(matches!(err, EditorError::Config(_)));
    }
}
