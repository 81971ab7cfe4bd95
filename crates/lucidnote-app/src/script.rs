//! Replay scripts: a JSON list of canvas input steps.

use kurbo::Point;
use lucidnote_core::input::{CanvasCommand, KeyEvent, PointerEvent};
use lucidnote_core::shapes::PaletteColor;
use lucidnote_core::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// One input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    Key { key: String },
    Tool { tool: ToolKind },
    Color { color: PaletteColor },
    Clear,
    /// Start editing the topmost note or text box under the point.
    Focus { x: f64, y: f64 },
    /// Replace the text of the element being edited.
    Type { text: String },
    Blur,
}

/// What a step turns into once resolved against the canvas.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Input {
    Pointer(PointerEvent),
    Key(KeyEvent),
    Command(CanvasCommand),
    FocusAt(Point),
    Type(String),
}

impl Step {
    pub(crate) fn into_input(self) -> Input {
        match self {
            Step::Down { x, y } => Input::Pointer(PointerEvent::Down {
                position: Point::new(x, y),
            }),
            Step::Move { x, y } => Input::Pointer(PointerEvent::Move {
                position: Point::new(x, y),
            }),
            Step::Up { x, y } => Input::Pointer(PointerEvent::Up {
                position: Point::new(x, y),
            }),
            Step::Leave => Input::Pointer(PointerEvent::Leave),
            Step::Key { key } => Input::Key(KeyEvent::Pressed(key)),
            Step::Tool { tool } => Input::Command(CanvasCommand::SelectTool { tool }),
            Step::Color { color } => Input::Command(CanvasCommand::SelectColor { color }),
            Step::Clear => Input::Command(CanvasCommand::Clear),
            Step::Focus { x, y } => Input::FocusAt(Point::new(x, y)),
            Step::Type { text } => Input::Type(text),
            Step::Blur => Input::Command(CanvasCommand::Blur),
        }
    }
}

/// A sequence of steps applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from JSON. Accepts `{"steps": [...]}` or a bare array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Wrapped(Script),
            Bare(Vec<Step>),
        }
        Ok(match serde_json::from_str(json)? {
            Repr::Wrapped(script) => script,
            Repr::Bare(steps) => Script { steps },
        })
    }
}
