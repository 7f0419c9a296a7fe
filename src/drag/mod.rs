//! Pointer drag tracking and canvas clamping
//!
//! The controller only tracks gesture state (drag offset and the document as
//! it was when the gesture started). Applying positions to the document and
//! committing history is done by `EditorState`, which owns both.

use serde::{Deserialize, Serialize};

use crate::models::document::Document;
use crate::models::text_item::{ItemId, Position};

/// Canvas size in pixels, as reported by the host's bounding rect
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Assumed rendered size of a text item.
///
/// This is a fixed approximation, not a measurement of the rendered text.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new(150.0, 50.0)
    }
}

/// Clamp a top-left position so the footprint stays inside the canvas.
///
/// When the canvas is smaller than the footprint the lower bound wins and
/// the coordinate is 0.
pub fn clamp_to_canvas(target: Position, bounds: CanvasBounds, footprint: Footprint) -> Position {
    let max_x = bounds.width - footprint.width;
    let max_y = bounds.height - footprint.height;
    Position::new(target.x.min(max_x).max(0.0), target.y.min(max_y).max(0.0))
}

#[derive(Clone, Debug, PartialEq)]
struct ActiveDrag {
    item_id: ItemId,
    offset: Position,
    /// Document at the start of the gesture, committed on release
    before: Document,
}

/// Drag gesture state machine: `idle -> dragging -> idle`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn dragged_item(&self) -> Option<ItemId> {
        self.active.as_ref().map(|drag| drag.item_id)
    }

    /// Start (or re-target) a drag on `item_id` whose top-left is `origin`.
    ///
    /// Re-targeting keeps the snapshot taken when the gesture first started.
    pub fn begin(&mut self, item_id: ItemId, pointer: Position, origin: Position, current: &Document) {
        let offset = pointer.offset_from(origin);
        let before = match self.active.take() {
            Some(previous) => previous.before,
            None => current.clone(),
        };
        self.active = Some(ActiveDrag {
            item_id,
            offset,
            before,
        });
    }

    /// Target position for the dragged item, or `None` when idle
    pub fn target(&self, pointer: Position, bounds: CanvasBounds, footprint: Footprint) -> Option<(ItemId, Position)> {
        let drag = self.active.as_ref()?;
        let raw = pointer.offset_from(drag.offset);
        Some((drag.item_id, clamp_to_canvas(raw, bounds, footprint)))
    }

    /// Finish the gesture, handing back the pre-drag document
    pub fn end(&mut self) -> Option<Document> {
        self.active.take().map(|drag| drag.before)
    }
}
