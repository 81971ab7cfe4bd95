//! Tool system for the canvas.

use crate::shapes::{ElementId, ElementKind, PaletteColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    StickyNote,
    Rectangle,
    Circle,
    TextBox,
    Pen,
    Move,
    Eraser,
}

impl ToolKind {
    /// The element kind a placement tool creates.
    pub fn placement_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::StickyNote => Some(ElementKind::StickyNote),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Circle => Some(ElementKind::Circle),
            ToolKind::TextBox => Some(ElementKind::TextBox),
            ToolKind::Pen | ToolKind::Move | ToolKind::Eraser => None,
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    /// Tool is idle, waiting for interaction.
    #[default]
    Idle,
    /// Pen is capturing samples.
    Drawing {
        /// Samples recorded so far, in capture order.
        points: Vec<Point>,
    },
    /// Move tool is dragging an element.
    Dragging { id: ElementId },
}

/// Manages the current tool, color and the in-progress gesture.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
    /// Color applied to new elements and strokes.
    pub current_color: PaletteColor,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager with a starting color.
    pub fn with_color(color: PaletteColor) -> Self {
        Self {
            current_color: color,
            ..Self::default()
        }
    }

    /// Set the current tool. Any in-progress gesture is abandoned.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.is_active() {
            log::debug!("Switching to {:?} cancels {:?} gesture", tool, self.current_tool);
        }
        self.current_tool = tool;
        self.cancel();
    }

    /// Set the color for subsequently created content.
    pub fn set_color(&mut self, color: PaletteColor) {
        self.current_color = color;
    }

    /// Start capturing a pen stroke at `point`.
    pub fn begin_stroke(&mut self, point: Point) {
        self.state = ToolState::Drawing {
            points: vec![point],
        };
    }

    /// Append a sample to the stroke being captured. Ignored when not drawing.
    pub fn extend_stroke(&mut self, point: Point) {
        if let ToolState::Drawing { points } = &mut self.state {
            points.push(point);
        }
    }

    /// Stop capturing and hand back the recorded samples.
    pub fn finish_stroke(&mut self) -> Option<Vec<Point>> {
        match std::mem::take(&mut self.state) {
            ToolState::Drawing { points } => Some(points),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Start dragging an element with the move tool.
    pub fn begin_drag(&mut self, id: ElementId) {
        self.state = ToolState::Dragging { id };
    }

    /// Element being dragged, if any.
    pub fn dragging(&self) -> Option<ElementId> {
        match self.state {
            ToolState::Dragging { id } => Some(id),
            _ => None,
        }
    }

    /// Samples of the stroke being captured (empty when not drawing).
    pub fn in_progress_points(&self) -> &[Point] {
        match &self.state {
            ToolState::Drawing { points } => points,
            _ => &[],
        }
    }

    /// End the current interaction.
    pub fn cancel(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a tool interaction is active.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ToolState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_tool_selection() {
        let mut tm = ToolManager::new();
        assert_eq!(tm.current_tool, ToolKind::StickyNote);

        tm.set_tool(ToolKind::Rectangle);
        assert_eq!(tm.current_tool, ToolKind::Rectangle);
    }

    #[test]
    fn test_stroke_capture() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Pen);

        tm.begin_stroke(Point::new(0.0, 0.0));
        assert!(tm.is_active());
        tm.extend_stroke(Point::new(5.0, 5.0));
        assert_eq!(tm.in_progress_points().len(), 2);

        let points = tm.finish_stroke().unwrap();
        assert_eq!(points, vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
        assert!(!tm.is_active());
        assert!(tm.in_progress_points().is_empty());
    }

    #[test]
    fn test_switching_tool_discards_stroke() {
        let mut tm = ToolManager::new();
        tm.set_tool(ToolKind::Pen);
        tm.begin_stroke(Point::new(0.0, 0.0));
        tm.extend_stroke(Point::new(1.0, 1.0));

        tm.set_tool(ToolKind::Move);
        assert!(!tm.is_active());
        assert!(tm.finish_stroke().is_none());
    }

    #[test]
    fn test_finish_without_drawing_keeps_drag() {
        let mut tm = ToolManager::new();
        let id = Uuid::new_v4();
        tm.begin_drag(id);

        assert!(tm.finish_stroke().is_none());
        assert_eq!(tm.dragging(), Some(id));
    }

    #[test]
    fn test_placement_kinds() {
        assert_eq!(ToolKind::Circle.placement_kind(), Some(ElementKind::Circle));
        assert_eq!(ToolKind::Pen.placement_kind(), None);
        assert_eq!(ToolKind::Eraser.placement_kind(), None);
    }
}
