//! Canvas Text Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion, and logging
//! - `types`: Result types returned to the host
//! - `core`: The exported functions and the WASM-owned editor instance

pub mod helpers;
pub mod types;
pub mod core;

pub use self::core::*;
pub use types::EditorSnapshot;
