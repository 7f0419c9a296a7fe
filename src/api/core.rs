//! WASM API for the canvas text editor
//!
//! The editor instance is owned here; every exported function locks it,
//! routes the call through `EditorState::apply` and hands the host a fresh
//! `EditorSnapshot` to render from.

use wasm_bindgen::prelude::*;
use std::sync::Mutex;
use lazy_static::lazy_static;
use web_sys::Element;

use crate::api::helpers::{deserialize, editor_error, serialize};
use crate::api::types::EditorSnapshot;
use crate::config::EditorConfig;
use crate::drag::CanvasBounds;
use crate::error::EditorError;
use crate::models::{Action, EditorState, FontSize, ItemId, Outcome, Position, Selection};
use crate::renderers::DisplayList;
use crate::toolbar::{FieldChange, StyleToggle};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

// WASM-owned editor storage (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<EditorState>> = Mutex::new(None);
}

/// Run `f` against the live editor
fn with_editor<T, F>(f: F) -> Result<T, JsValue>
where
    F: FnOnce(&mut EditorState) -> Result<T, EditorError>,
{
    let mut guard = EDITOR.lock().map_err(|_| {
        wasm_error!("Editor lock poisoned");
        JsValue::from_str("Editor lock poisoned")
    })?;
    let state = guard.as_mut().ok_or_else(|| editor_error(EditorError::NoEditor))?;
    f(state).map_err(editor_error)
}

/// Apply an action and serialize the resulting snapshot
fn dispatch_action(action: Action) -> Result<JsValue, JsValue> {
    let snapshot = with_editor(|state| {
        let outcome = state.apply(action)?;
        Ok(EditorSnapshot::capture(state, outcome))
    })?;

    if snapshot.outcome == Outcome::Unchanged {
        wasm_log!("  no change");
    }
    serialize(&snapshot, "EditorSnapshot serialization error")
}

fn install(state: EditorState) -> Result<JsValue, JsValue> {
    let snapshot = EditorSnapshot::capture(&state, Outcome::Changed);
    let mut guard = EDITOR.lock().map_err(|_| JsValue::from_str("Editor lock poisoned"))?;
    *guard = Some(state);
    serialize(&snapshot, "EditorSnapshot serialization error")
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Create the editor, replacing any existing one
///
/// # Parameters
/// - `config_js`: optional configuration object; missing fields use defaults
///
/// # Returns
/// The initial EditorSnapshot
#[wasm_bindgen(js_name = createEditor)]
pub fn create_editor(config_js: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("createEditor called");

    let config: EditorConfig = if config_js.is_undefined() || config_js.is_null() {
        EditorConfig::default()
    } else {
        deserialize(config_js, "EditorConfig deserialization error")?
    };

    let state = EditorState::new(config);
    wasm_info!("  Created editor with {} item(s)", state.document().len());
    install(state)
}

/// Create the editor from configuration JSON text
#[wasm_bindgen(js_name = createEditorFromJson)]
pub fn create_editor_from_json(config_json: &str) -> Result<JsValue, JsValue> {
    wasm_info!("createEditorFromJson called");

    let config = EditorConfig::from_json(config_json).map_err(editor_error)?;
    install(EditorState::new(config))
}

/// Drop the editor; state is not persisted anywhere
#[wasm_bindgen(js_name = resetEditor)]
pub fn reset_editor() -> Result<(), JsValue> {
    wasm_info!("resetEditor called");

    let mut guard = EDITOR.lock().map_err(|_| JsValue::from_str("Editor lock poisoned"))?;
    *guard = None;
    Ok(())
}

// ============================================================================
// Read access (rendering and toolbar boundaries)
// ============================================================================

#[wasm_bindgen(js_name = getSnapshot)]
pub fn get_snapshot() -> Result<JsValue, JsValue> {
    let snapshot = with_editor(|state| Ok(EditorSnapshot::capture(state, Outcome::Unchanged)))?;
    serialize(&snapshot, "EditorSnapshot serialization error")
}

#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    let list = with_editor(|state| Ok(DisplayList::build(state.document(), state.selection())))?;
    serialize(&list, "DisplayList serialization error")
}

/// Current document as a JavaScript array of TextItem objects
#[wasm_bindgen(js_name = getItems)]
pub fn get_items() -> Result<js_sys::Array, JsValue> {
    let items = with_editor(|state| Ok(state.document().to_items()))?;

    let result = js_sys::Array::new();
    for item in &items {
        result.push(&serialize(item, "TextItem serialization error")?);
    }
    Ok(result)
}

#[wasm_bindgen(js_name = getToolbar)]
pub fn get_toolbar() -> Result<JsValue, JsValue> {
    let view = with_editor(|state| Ok(state.toolbar()))?;
    serialize(&view, "ToolbarView serialization error")
}

// ============================================================================
// Document editing
// ============================================================================

#[wasm_bindgen(js_name = addItem)]
pub fn add_item() -> Result<JsValue, JsValue> {
    wasm_info!("addItem called");
    dispatch_action(Action::AddItem)
}

/// Select an item, or clear the selection with `undefined`
#[wasm_bindgen(js_name = selectItem)]
pub fn select_item(item_id: Option<ItemId>) -> Result<JsValue, JsValue> {
    wasm_info!("selectItem called: {:?}", item_id);
    dispatch_action(Action::Select {
        selection: Selection::from(item_id),
    })
}

/// Set one field on a named item
///
/// # Parameters
/// - `item_id`: target item
/// - `change_js`: `{ field: "fontSize", value: 18 }`
#[wasm_bindgen(js_name = setField)]
pub fn set_field(item_id: ItemId, change_js: JsValue) -> Result<JsValue, JsValue> {
    let change: FieldChange = deserialize(change_js, "FieldChange deserialization error")?;
    wasm_info!("setField called: item={}, field={}", item_id, change.field_name());
    dispatch_action(Action::SetField { item_id, change })
}

/// Set one field on the selected item; ignored when nothing is selected
#[wasm_bindgen(js_name = editSelected)]
pub fn edit_selected(change_js: JsValue) -> Result<JsValue, JsValue> {
    let change: FieldChange = deserialize(change_js, "FieldChange deserialization error")?;
    wasm_info!("editSelected called: field={}", change.field_name());
    dispatch_action(Action::EditSelected { change })
}

/// Font size `<select>` change on the selected item
///
/// # Parameters
/// - `px`: the parsed option value; must be one of the toolbar's sizes
#[wasm_bindgen(js_name = setFontSize)]
pub fn set_font_size(px: u32) -> Result<JsValue, JsValue> {
    let size = FontSize::try_from(px).map_err(editor_error)?;
    wasm_info!("setFontSize called: {}", size);
    dispatch_action(Action::EditSelected {
        change: FieldChange::FontSize(size),
    })
}

#[wasm_bindgen(js_name = toggleBold)]
pub fn toggle_bold() -> Result<JsValue, JsValue> {
    dispatch_action(Action::Toggle {
        toggle: StyleToggle::Bold,
    })
}

#[wasm_bindgen(js_name = toggleItalic)]
pub fn toggle_italic() -> Result<JsValue, JsValue> {
    dispatch_action(Action::Toggle {
        toggle: StyleToggle::Italic,
    })
}

#[wasm_bindgen(js_name = toggleUnderline)]
pub fn toggle_underline() -> Result<JsValue, JsValue> {
    dispatch_action(Action::Toggle {
        toggle: StyleToggle::Underline,
    })
}

/// Apply any serialized Action, e.g. `{ type: "undo" }`
#[wasm_bindgen(js_name = dispatch)]
pub fn dispatch(action_js: JsValue) -> Result<JsValue, JsValue> {
    let action: Action = deserialize(action_js, "Action deserialization error")?;
    wasm_log!("dispatch called: {:?}", action);
    dispatch_action(action)
}

// ============================================================================
// Pointer dragging
// ============================================================================

/// Pointer-down on an item, in canvas-local coordinates
#[wasm_bindgen(js_name = beginDrag)]
pub fn begin_drag(item_id: ItemId, x: f64, y: f64) -> Result<JsValue, JsValue> {
    wasm_log!("beginDrag called: item={}, pointer=({}, {})", item_id, x, y);
    dispatch_action(Action::BeginDrag {
        item_id,
        pointer: Position::new(x, y),
    })
}

/// Pointer-move, in canvas-local coordinates, with the canvas size
#[wasm_bindgen(js_name = updateDrag)]
pub fn update_drag(x: f64, y: f64, width: f64, height: f64) -> Result<JsValue, JsValue> {
    dispatch_action(Action::UpdateDrag {
        pointer: Position::new(x, y),
        bounds: CanvasBounds::new(width, height),
    })
}

#[wasm_bindgen(js_name = endDrag)]
pub fn end_drag() -> Result<JsValue, JsValue> {
    wasm_log!("endDrag called");
    dispatch_action(Action::EndDrag)
}

#[wasm_bindgen(js_name = cancelDrag)]
pub fn cancel_drag() -> Result<JsValue, JsValue> {
    wasm_log!("cancelDrag called");
    dispatch_action(Action::CancelDrag)
}

/// Convert client coordinates to the canvas element's local frame
fn canvas_local(canvas: &Element, client_x: f64, client_y: f64) -> (Position, CanvasBounds) {
    let rect = canvas.get_bounding_client_rect();
    (
        Position::new(client_x - rect.left(), client_y - rect.top()),
        CanvasBounds::new(rect.width(), rect.height()),
    )
}

/// Pointer-down with client coordinates, relative to `canvas`
#[wasm_bindgen(js_name = beginDragInElement)]
pub fn begin_drag_in_element(
    item_id: ItemId,
    canvas: &Element,
    client_x: f64,
    client_y: f64,
) -> Result<JsValue, JsValue> {
    let (pointer, _) = canvas_local(canvas, client_x, client_y);
    begin_drag(item_id, pointer.x, pointer.y)
}

/// Pointer-move with client coordinates; bounds come from `canvas`
#[wasm_bindgen(js_name = updateDragInElement)]
pub fn update_drag_in_element(canvas: &Element, client_x: f64, client_y: f64) -> Result<JsValue, JsValue> {
    let (pointer, bounds) = canvas_local(canvas, client_x, client_y);
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        wasm_warn!("Canvas has no size ({}x{}), item pinned to origin", bounds.width, bounds.height);
    }
    dispatch_action(Action::UpdateDrag { pointer, bounds })
}

// ============================================================================
// Undo/Redo operations
// ============================================================================

/// Undo the last edit operation; a no-op when there is nothing to undo
#[wasm_bindgen(js_name = undo)]
pub fn undo() -> Result<JsValue, JsValue> {
    wasm_info!("undo called");
    dispatch_action(Action::Undo)
}

/// Redo the last undone edit operation; a no-op when there is nothing to redo
#[wasm_bindgen(js_name = redo)]
pub fn redo() -> Result<JsValue, JsValue> {
    wasm_info!("redo called");
    dispatch_action(Action::Redo)
}

/// Check if undo is available
#[wasm_bindgen(js_name = canUndo)]
pub fn can_undo() -> Result<bool, JsValue> {
    let guard = EDITOR.lock().map_err(|_| JsValue::from_str("Editor lock poisoned"))?;
    Ok(guard.as_ref().map_or(false, |state| state.can_undo()))
}

/// Check if redo is available
#[wasm_bindgen(js_name = canRedo)]
pub fn can_redo() -> Result<bool, JsValue> {
    let guard = EDITOR.lock().map_err(|_| JsValue::from_str("Editor lock poisoned"))?;
    Ok(guard.as_ref().map_or(false, |state| state.can_redo()))
}
