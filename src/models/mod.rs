//! Models module for the canvas text editor
//!
//! This module contains the data models for text items, the document they
//! live in, selection, and the editor state that owns them all.

pub mod text_item;
pub mod document;
pub mod selection;
pub mod editor_state;

// Re-export commonly used types
pub use text_item::*;
pub use document::Document;
pub use selection::Selection;
pub use editor_state::{Action, EditorState, Outcome};
