//! Renderers module for the canvas text editor
//!
//! This module converts editor state into the structures the browser host
//! draws from.

pub mod display_list;

pub use display_list::{css_style, DisplayList, RenderItem};
