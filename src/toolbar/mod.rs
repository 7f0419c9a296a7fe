//! Style toolbar
//!
//! Field edits arrive keyed by field name; the three style buttons are
//! two-value toggles resolved against the item's current value.

use serde::{Deserialize, Serialize};

use crate::models::text_item::{FontSize, FontStyle, FontWeight, Position, TextDecoration, TextItem};

/// A single field edit, as sent by the host: `{ "field": "fontSize", "value": 18 }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldChange {
    Value(String),
    FontSize(FontSize),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    TextDecoration(TextDecoration),
    Position(Position),
}

impl FieldChange {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldChange::Value(_) => "value",
            FieldChange::FontSize(_) => "fontSize",
            FieldChange::FontWeight(_) => "fontWeight",
            FieldChange::FontStyle(_) => "fontStyle",
            FieldChange::TextDecoration(_) => "textDecoration",
            FieldChange::Position(_) => "position",
        }
    }

    /// Copy of `item` with this change applied
    pub fn apply_to(&self, item: &TextItem) -> TextItem {
        let mut next = item.clone();
        match self {
            FieldChange::Value(value) => next.value = value.clone(),
            FieldChange::FontSize(size) => next.font_size = *size,
            FieldChange::FontWeight(weight) => next.font_weight = *weight,
            FieldChange::FontStyle(style) => next.font_style = *style,
            FieldChange::TextDecoration(decoration) => next.text_decoration = *decoration,
            FieldChange::Position(position) => next.position = *position,
        }
        next
    }
}

/// The B / I / U buttons
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StyleToggle {
    Bold,
    Italic,
    Underline,
}

impl StyleToggle {
    /// The field change that flips this style on `item`
    pub fn change_for(self, item: &TextItem) -> FieldChange {
        match self {
            StyleToggle::Bold => FieldChange::FontWeight(item.font_weight.toggled()),
            StyleToggle::Italic => FieldChange::FontStyle(item.font_style.toggled()),
            StyleToggle::Underline => FieldChange::TextDecoration(item.text_decoration.toggled()),
        }
    }
}

/// Values the toolbar controls display
///
/// With nothing selected the controls show placeholders and `enabled` is
/// false.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarView {
    pub enabled: bool,
    pub value: String,
    pub font_size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_sizes: Vec<FontSize>,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl ToolbarView {
    pub fn for_item(item: Option<&TextItem>, can_undo: bool, can_redo: bool) -> Self {
        match item {
            Some(item) => Self {
                enabled: true,
                value: item.value.clone(),
                font_size: item.font_size,
                bold: item.is_bold(),
                italic: item.is_italic(),
                underline: item.is_underlined(),
                font_sizes: FontSize::ALL.to_vec(),
                can_undo,
                can_redo,
            },
            None => Self {
                enabled: false,
                value: String::new(),
                font_size: FontSize::Px16,
                bold: false,
                italic: false,
                underline: false,
                font_sizes: FontSize::ALL.to_vec(),
                can_undo,
                can_redo,
            },
        }
    }
}
