//! Display List for canvas rendering
//!
//! This module defines the output structure returned to JavaScript. The
//! DisplayList contains everything needed to draw each text item as an
//! absolutely positioned DOM node without any further calculation.

use serde::{Deserialize, Serialize};

use crate::models::document::Document;
use crate::models::selection::Selection;
use crate::models::text_item::{ItemId, TextItem};

/// CSS class carried by every rendered item
pub const ITEM_CLASS: &str = "draggable-text";

/// CSS class added to the selected item
pub const SELECTED_CLASS: &str = "selected";

/// Top-level display list, in document order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub items: Vec<RenderItem>,
}

/// A single text node with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderItem {
    /// Item id, echoed back by the host on pointer-down
    pub id: ItemId,

    /// The text to display
    pub text: String,

    /// X position (left edge)
    pub x: f64,

    /// Y position (top edge)
    pub y: f64,

    /// Inline CSS declarations
    pub style: String,

    /// CSS class names to apply
    pub classes: Vec<String>,

    pub selected: bool,
}

impl RenderItem {
    pub fn from_item(item: &TextItem, selected: bool) -> Self {
        let mut classes = vec![ITEM_CLASS.to_string()];
        if selected {
            classes.push(SELECTED_CLASS.to_string());
        }

        Self {
            id: item.id,
            text: item.value.clone(),
            x: item.position.x,
            y: item.position.y,
            style: css_style(item),
            classes,
            selected,
        }
    }
}

impl DisplayList {
    pub fn build(document: &Document, selection: Selection) -> Self {
        Self {
            items: document
                .iter()
                .map(|item| RenderItem::from_item(item, selection.is_selected(item.id)))
                .collect(),
        }
    }
}

/// Inline style for an item's DOM node
pub fn css_style(item: &TextItem) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; font-size: {}px; font-weight: {}; font-style: {}; text-decoration: {};",
        item.position.x,
        item.position.y,
        item.font_size.px(),
        item.font_weight.css(),
        item.font_style.css(),
        item.text_decoration.css(),
    )
}
