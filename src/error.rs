//! Error types for editor operations
//!
//! Core transitions are total; errors only arise from validating input that
//! names an item, a font size, or a configuration the editor cannot use.

use thiserror::Error;

use crate::models::text_item::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// No text item with this id exists in the current document
    #[error("Text item {0} not found")]
    UnknownItem(ItemId),

    /// Font size outside the toolbar's option list
    #[error("Invalid font size: {0}px")]
    InvalidFontSize(u32),

    /// An API call arrived before `createEditor`
    #[error("No editor created")]
    NoEditor,

    /// Configuration could not be parsed
    #[error("Invalid editor configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        EditorError::Config(err.to_string())
    }
}
