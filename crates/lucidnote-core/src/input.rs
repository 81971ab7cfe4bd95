//! Input events delivered to the canvas.

use crate::shapes::{ElementId, PaletteColor};
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Key name that deletes the current selection.
pub const DELETE_KEY: &str = "Delete";

/// Pointer event with canvas-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    /// Pointer left the canvas. Ends the active gesture like `Up`.
    Leave,
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

/// Discrete commands issued by toolbar buttons and text inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasCommand {
    SelectTool { tool: ToolKind },
    SelectColor { color: PaletteColor },
    /// Remove every element and stroke and reset the layer sequence.
    Clear,
    /// Text input gained focus on a note or text box.
    Focus { id: ElementId },
    /// Replace the text of the element being edited.
    EditText { id: ElementId, text: String },
    /// Text input lost focus.
    Blur,
}

impl KeyEvent {
    /// Whether this is a press of the delete key.
    pub fn is_delete(&self) -> bool {
        matches!(self, KeyEvent::Pressed(key) if key == DELETE_KEY)
    }
}
