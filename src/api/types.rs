//! Shared types for the WASM API
//!
//! This module contains the result types returned to the host.

use crate::models::{EditorState, ItemId, Outcome, TextItem};
use crate::renderers::DisplayList;
use crate::toolbar::ToolbarView;

/// Everything the host needs to re-render after an operation
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub outcome: Outcome,
    pub items: Vec<TextItem>,
    pub display_list: DisplayList,
    pub selected_id: Option<ItemId>,
    pub dragging: bool,
    pub toolbar: ToolbarView,
}

impl EditorSnapshot {
    pub fn capture(state: &EditorState, outcome: Outcome) -> Self {
        Self {
            outcome,
            items: state.document().to_items(),
            display_list: DisplayList::build(state.document(), state.selection()),
            selected_id: state.selection().id(),
            dragging: state.is_dragging(),
            toolbar: state.toolbar(),
        }
    }
}
