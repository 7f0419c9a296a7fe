//! Text item data structures
//!
//! A `TextItem` is a single draggable, stylable label placed on the canvas.
//! Style fields use the CSS keyword values the renderer applies directly.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

use crate::error::EditorError;

/// Unique, monotonically assigned item identifier
pub type ItemId = u32;

/// Top-left corner of an item in canvas-local pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `other` to `self`
    pub fn offset_from(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y)
    }
}

/// Font size in pixels, restricted to the toolbar's option list
#[repr(u16)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
pub enum FontSize {
    Px12 = 12,
    Px14 = 14,
    #[default]
    Px16 = 16,
    Px18 = 18,
    Px20 = 20,
    Px24 = 24,
    Px28 = 28,
}

impl FontSize {
    /// Every selectable size, smallest first
    pub const ALL: [FontSize; 7] = [
        FontSize::Px12,
        FontSize::Px14,
        FontSize::Px16,
        FontSize::Px18,
        FontSize::Px20,
        FontSize::Px24,
        FontSize::Px28,
    ];

    pub fn px(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u32> for FontSize {
    type Error = EditorError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        FontSize::ALL
            .iter()
            .copied()
            .find(|size| u32::from(size.px()) == px)
            .ok_or(EditorError::InvalidFontSize(px))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.px())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn toggled(self) -> Self {
        match self {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn toggled(self) -> Self {
        match self {
            FontStyle::Normal => FontStyle::Italic,
            FontStyle::Italic => FontStyle::Normal,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    pub fn toggled(self) -> Self {
        match self {
            TextDecoration::None => TextDecoration::Underline,
            TextDecoration::Underline => TextDecoration::None,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
        }
    }
}

/// A single text label on the canvas
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub id: ItemId,
    pub value: String,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    pub position: Position,
}

impl TextItem {
    /// Create an unstyled item at `position`
    pub fn new(id: ItemId, value: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            value: value.into(),
            font_size: FontSize::default(),
            font_weight: FontWeight::default(),
            font_style: FontStyle::default(),
            text_decoration: TextDecoration::default(),
            position,
        }
    }

    /// Copy of this item moved to `position`
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.font_weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == FontStyle::Italic
    }

    pub fn is_underlined(&self) -> bool {
        self.text_decoration == TextDecoration::Underline
    }
}
