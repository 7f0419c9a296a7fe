//! Editor state management
//!
//! `EditorState` is the single owner of the document, selection, drag
//! gesture and history. Every user event is an [`Action`] fed through
//! [`EditorState::apply`], which is the one place where the history rules
//! are enforced: each document mutation other than undo/redo commits the
//! prior document and thereby clears the redo stack.

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::drag::{CanvasBounds, DragController};
use crate::error::EditorError;
use crate::models::document::Document;
use crate::models::selection::Selection;
use crate::models::text_item::{ItemId, Position, TextItem};
use crate::toolbar::{FieldChange, StyleToggle, ToolbarView};
use crate::undo::History;

/// A user event routed to the editor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    AddItem,
    Select { selection: Selection },
    BeginDrag { item_id: ItemId, pointer: Position },
    UpdateDrag { pointer: Position, bounds: CanvasBounds },
    EndDrag,
    CancelDrag,
    /// Edit a named item
    SetField { item_id: ItemId, change: FieldChange },
    /// Edit whatever is selected
    EditSelected { change: FieldChange },
    Toggle { toggle: StyleToggle },
    Undo,
    Redo,
}

/// Whether an action changed anything the view shows
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Changed,
    Unchanged,
}

/// Complete editor state
#[derive(Clone, Debug)]
pub struct EditorState {
    config: EditorConfig,
    document: Document,
    selection: Selection,
    drag: DragController,
    history: History,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorState {
    /// Create an editor; the document is seeded unless the config says not to
    pub fn new(config: EditorConfig) -> Self {
        let document = if config.seed_document {
            Document::seeded()
        } else {
            Document::new()
        };
        Self::with_document(config, document)
    }

    pub fn with_document(config: EditorConfig, document: Document) -> Self {
        Self {
            history: History::with_limit(config.history_limit),
            config,
            document,
            selection: Selection::None,
            drag: DragController::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&TextItem> {
        self.selection.id().and_then(|id| self.document.get(id))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn toolbar(&self) -> ToolbarView {
        ToolbarView::for_item(self.selected_item(), self.can_undo(), self.can_redo())
    }

    /// Apply one user event
    pub fn apply(&mut self, action: Action) -> Result<Outcome, EditorError> {
        log::debug!("apply {:?}", action);

        match action {
            Action::AddItem => Ok(self.add_item()),
            Action::Select { selection } => self.select(selection),
            Action::BeginDrag { item_id, pointer } => self.begin_drag(item_id, pointer),
            Action::UpdateDrag { pointer, bounds } => Ok(self.update_drag(pointer, bounds)),
            Action::EndDrag => Ok(self.end_drag()),
            Action::CancelDrag => Ok(self.cancel_drag()),
            Action::SetField { item_id, change } => self.set_field(item_id, change),
            Action::EditSelected { change } => self.edit_selected(change),
            Action::Toggle { toggle } => self.toggle(toggle),
            Action::Undo => Ok(self.undo()),
            Action::Redo => Ok(self.redo()),
        }
    }

    /// Replace the document with `next`, committing the current one first.
    ///
    /// A drag still in progress is settled before the edit, so its pre-drag
    /// snapshot lands in history ahead of the document the edit replaces.
    fn commit(&mut self, next: Document) {
        self.settle_drag();
        let before = std::mem::replace(&mut self.document, next);
        self.history.commit(before);
    }

    /// Close a drag in progress, committing its pre-drag snapshot
    fn settle_drag(&mut self) -> Outcome {
        match self.drag.end() {
            Some(before) => {
                self.history.commit(before);
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    pub fn add_item(&mut self) -> Outcome {
        let mut item = TextItem::new(
            self.document.next_id(),
            self.config.default_text.clone(),
            self.config.default_position,
        );
        item.font_size = self.config.default_font_size;

        log::debug!("Adding text item {}", item.id);
        let next = self.document.with_item(item);
        self.commit(next);
        Outcome::Changed
    }

    /// Change the selection. Not a document mutation; no history entry.
    pub fn select(&mut self, selection: Selection) -> Result<Outcome, EditorError> {
        if let Selection::Selected(id) = selection {
            if !self.document.contains(id) {
                return Err(EditorError::UnknownItem(id));
            }
        }
        if self.selection == selection {
            return Ok(Outcome::Unchanged);
        }
        self.selection = selection;
        Ok(Outcome::Changed)
    }

    pub fn begin_drag(&mut self, item_id: ItemId, pointer: Position) -> Result<Outcome, EditorError> {
        let origin = self
            .document
            .get(item_id)
            .map(|item| item.position)
            .ok_or(EditorError::UnknownItem(item_id))?;

        self.drag.begin(item_id, pointer, origin, &self.document);
        self.selection = Selection::Selected(item_id);
        Ok(Outcome::Changed)
    }

    /// Move the dragged item under the pointer. Only the dragged item's
    /// position is replaced; history is untouched until the drag ends.
    pub fn update_drag(&mut self, pointer: Position, bounds: CanvasBounds) -> Outcome {
        if self.selection == Selection::None {
            return Outcome::Unchanged;
        }
        let Some((id, position)) = self.drag.target(pointer, bounds, self.config.item_footprint) else {
            return Outcome::Unchanged;
        };

        match self.document.with_updated(id, |item| item.with_position(position)) {
            Some(next) => {
                self.document = next;
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    /// Release the pointer. A drag in progress commits its pre-drag snapshot.
    pub fn end_drag(&mut self) -> Outcome {
        self.settle_drag()
    }

    /// Abandon a drag, restoring the pre-drag document without a history entry
    pub fn cancel_drag(&mut self) -> Outcome {
        match self.drag.end() {
            Some(before) => {
                self.document = before;
                Outcome::Changed
            }
            None => Outcome::Unchanged,
        }
    }

    pub fn set_field(&mut self, item_id: ItemId, change: FieldChange) -> Result<Outcome, EditorError> {
        let next = self
            .document
            .with_updated(item_id, |item| change.apply_to(item))
            .ok_or(EditorError::UnknownItem(item_id))?;

        log::debug!("Set {} on text item {}", change.field_name(), item_id);
        self.commit(next);
        Ok(Outcome::Changed)
    }

    /// Toolbar edit of the selected item; a guarded no-op without a selection
    pub fn edit_selected(&mut self, change: FieldChange) -> Result<Outcome, EditorError> {
        match self.selection {
            Selection::Selected(id) => self.set_field(id, change),
            Selection::None => {
                log::warn!("Ignoring {} edit: no text item selected", change.field_name());
                Ok(Outcome::Unchanged)
            }
        }
    }

    pub fn toggle(&mut self, toggle: StyleToggle) -> Result<Outcome, EditorError> {
        match self.selected_item() {
            Some(item) => {
                let id = item.id;
                let change = toggle.change_for(item);
                self.set_field(id, change)
            }
            None => {
                log::warn!("Ignoring {:?} toggle: no text item selected", toggle);
                Ok(Outcome::Unchanged)
            }
        }
    }

    pub fn undo(&mut self) -> Outcome {
        let abandoned = self.abandon_drag();
        let current = self.document.clone();
        match self.history.undo(current) {
            Some(previous) => {
                self.document = previous;
                self.drop_stale_selection();
                Outcome::Changed
            }
            None => abandoned,
        }
    }

    pub fn redo(&mut self) -> Outcome {
        let abandoned = self.abandon_drag();
        let current = self.document.clone();
        match self.history.redo(current) {
            Some(next) => {
                self.document = next;
                self.drop_stale_selection();
                Outcome::Changed
            }
            None => abandoned,
        }
    }

    /// Undo/redo mid-gesture puts the pre-drag document back, uncommitted
    fn abandon_drag(&mut self) -> Outcome {
        let outcome = self.cancel_drag();
        if outcome == Outcome::Changed {
            log::debug!("Drag abandoned by history navigation");
        }
        outcome
    }

    fn drop_stale_selection(&mut self) {
        if let Selection::Selected(id) = self.selection {
            if !self.document.contains(id) {
                self.selection = Selection::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::text_item::{FontSize, FontWeight};

    const CANVAS: CanvasBounds = CanvasBounds::new(500.0, 400.0);

    fn editor() -> EditorState {
        EditorState::default()
    }

    #[test]
    fn test_editor_state_new() {
        let state = editor();

        assert_eq!(state.document().len(), 1);
        assert_eq!(state.selection(), Selection::None);
        assert!(!state.is_dragging());
        assert!(!state.can_undo());
    }

    #[test]
    fn test_unseeded_editor_is_empty() {
        let config = EditorConfig {
            seed_document: false,
            ..EditorConfig::default()
        };
        let mut state = EditorState::new(config);
        assert!(state.document().is_empty());

        state.add_item();
        assert_eq!(state.document().get(1).unwrap().value, "New Text");
    }

    #[test]
    fn test_add_item_uses_config_defaults() {
        let config = EditorConfig {
            default_text: "Hello".to_string(),
            default_font_size: FontSize::Px20,
            default_position: Position::new(5.0, 6.0),
            ..EditorConfig::default()
        };
        let mut state = EditorState::new(config);
        state.apply(Action::AddItem).unwrap();

        let item = state.document().get(2).unwrap();
        assert_eq!(item.value, "Hello");
        assert_eq!(item.font_size, FontSize::Px20);
        assert_eq!(item.position, Position::new(5.0, 6.0));
    }

    #[test]
    fn test_begin_drag_unknown_item() {
        let mut state = editor();
        let err = state.begin_drag(9, Position::default()).unwrap_err();
        assert_eq!(err, EditorError::UnknownItem(9));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_drag_commits_once() {
        let mut state = editor();
        let original = state.document().clone();

        state.begin_drag(1, Position::new(110.0, 110.0)).unwrap();
        state.update_drag(Position::new(150.0, 150.0), CANVAS);
        state.update_drag(Position::new(210.0, 160.0), CANVAS);
        assert!(!state.can_undo());
        state.end_drag();

        assert_eq!(state.document().get(1).unwrap().position, Position::new(200.0, 150.0));
        assert_eq!(state.history().undo_count(), 1);

        state.undo();
        assert_eq!(state.document(), &original);
    }

    #[test]
    fn test_click_without_move_still_commits() {
        let mut state = editor();
        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.end_drag();
        assert_eq!(state.history().undo_count(), 1);
    }

    #[test]
    fn test_end_drag_when_idle_is_noop() {
        let mut state = editor();
        assert_eq!(state.end_drag(), Outcome::Unchanged);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_update_drag_when_idle_is_noop() {
        let mut state = editor();
        state.select(Selection::Selected(1)).unwrap();
        let before = state.document().clone();

        assert_eq!(state.update_drag(Position::new(300.0, 300.0), CANVAS), Outcome::Unchanged);
        assert_eq!(state.document(), &before);
    }

    #[test]
    fn test_update_drag_without_selection_is_noop() {
        let mut state = editor();
        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.select(Selection::None).unwrap();

        assert_eq!(state.update_drag(Position::new(300.0, 300.0), CANVAS), Outcome::Unchanged);
    }

    #[test]
    fn test_cancel_drag_restores_without_history() {
        let mut state = editor();
        let original = state.document().clone();

        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.update_drag(Position::new(300.0, 300.0), CANVAS);
        state.cancel_drag();

        assert_eq!(state.document(), &original);
        assert!(!state.can_undo());
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_undo_mid_drag_abandons_gesture() {
        let mut state = editor();
        state.add_item();
        state.begin_drag(2, Position::new(50.0, 50.0)).unwrap();
        state.update_drag(Position::new(80.0, 80.0), CANVAS);

        state.undo();

        assert!(!state.is_dragging());
        assert_eq!(state.document().len(), 1);
        // Item 2 no longer exists, so it cannot stay selected
        assert_eq!(state.selection(), Selection::None);
        assert_eq!(state.end_drag(), Outcome::Unchanged);
    }

    #[test]
    fn test_undo_mid_drag_restores_pre_drag_document() {
        let mut state = editor();
        let original = state.document().clone();

        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.update_drag(Position::new(300.0, 300.0), CANVAS);

        // Nothing committed yet, so undo only discards the gesture
        assert_eq!(state.undo(), Outcome::Changed);
        assert_eq!(state.document(), &original);
        assert!(!state.is_dragging());
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn test_undo_mid_drag_steps_back_from_pre_drag_document() {
        let mut state = editor();
        let seeded = state.document().clone();
        state.add_item();
        let two_items = state.document().clone();

        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.update_drag(Position::new(300.0, 300.0), CANVAS);
        state.undo();

        assert_eq!(state.document(), &seeded);
        // Redo returns to the pre-drag document, never the half-dragged one
        state.redo();
        assert_eq!(state.document(), &two_items);
        assert!(!state.can_redo());
    }

    #[test]
    fn test_redo_mid_drag_discards_gesture() {
        let mut state = editor();
        state.add_item();
        state.undo();
        let seeded = state.document().clone();

        state.begin_drag(1, Position::new(100.0, 100.0)).unwrap();
        state.update_drag(Position::new(300.0, 300.0), CANVAS);
        state.redo();

        assert_eq!(state.document().len(), 2);
        assert_eq!(state.document().get(1).unwrap().position, Position::new(100.0, 100.0));
        state.undo();
        assert_eq!(state.document(), &seeded);
    }

    #[test]
    fn test_edit_selected_without_selection_is_guarded() {
        let mut state = editor();
        let before = state.document().clone();

        let outcome = state
            .edit_selected(FieldChange::Value("lost".to_string()))
            .unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(state.document(), &before);
        assert!(!state.can_undo());
        assert!(!state.toolbar().enabled);
    }

    #[test]
    fn test_toggle_without_selection_is_guarded() {
        let mut state = editor();
        assert_eq!(state.toggle(StyleToggle::Bold).unwrap(), Outcome::Unchanged);
        assert!(!state.can_undo());
    }

    #[test]
    fn test_set_field_unknown_item() {
        let mut state = editor();
        let err = state
            .set_field(5, FieldChange::FontSize(FontSize::Px12))
            .unwrap_err();
        assert_eq!(err, EditorError::UnknownItem(5));
        assert!(!state.can_undo());
    }

    #[test]
    fn test_toggle_bold_twice() {
        let mut state = editor();
        state.select(Selection::Selected(1)).unwrap();

        state.toggle(StyleToggle::Bold).unwrap();
        assert_eq!(state.selected_item().unwrap().font_weight, FontWeight::Bold);
        state.toggle(StyleToggle::Bold).unwrap();
        assert_eq!(state.selected_item().unwrap().font_weight, FontWeight::Normal);
        assert_eq!(state.history().undo_count(), 2);
    }

    #[test]
    fn test_select_unknown_item() {
        let mut state = editor();
        assert_eq!(
            state.select(Selection::Selected(3)),
            Err(EditorError::UnknownItem(3))
        );
    }

    #[test]
    fn test_toolbar_reflects_selection() {
        let mut state = editor();
        state.select(Selection::Selected(1)).unwrap();
        state.edit_selected(FieldChange::FontSize(FontSize::Px28)).unwrap();

        let view = state.toolbar();
        assert!(view.enabled);
        assert_eq!(view.value, "Celebrare");
        assert_eq!(view.font_size, FontSize::Px28);
        assert!(view.can_undo);
        assert!(!view.can_redo);
    }

    #[test]
    fn test_action_json_form() {
        let action: Action = serde_json::from_str(
            r#"{ "type": "setField", "itemId": 1, "change": { "field": "value", "value": "Hi" } }"#,
        )
        .unwrap();

        let mut state = editor();
        state.apply(action).unwrap();
        assert_eq!(state.document().get(1).unwrap().value, "Hi");
    }
}
