//! Translates pointer, keyboard and toolbar input into canvas operations.
//!
//! Every handler runs to completion synchronously; events are applied in the
//! order they are delivered.

use crate::canvas::Canvas;
use crate::input::{CanvasCommand, KeyEvent, PointerEvent};
use crate::shapes::{ElementId, ElementKind, StrokeId};
use crate::tools::ToolKind;
use kurbo::Point;

/// What a single event changed, for hosts that want to react (e.g. focus a
/// text input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasChange {
    #[default]
    None,
    ElementPlaced(ElementId),
    ElementSelected(ElementId),
    EditingStarted(ElementId),
    ElementMoved(ElementId),
    ElementRemoved(ElementId),
    StrokeCommitted(StrokeId),
    SelectionCleared,
    TextChanged(ElementId),
    Cleared,
}

impl Canvas {
    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> CanvasChange {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } | PointerEvent::Leave => self.pointer_release(),
        }
    }

    /// Process a key event. Only the delete key has an effect.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> CanvasChange {
        if event.is_delete() {
            self.delete_selected()
        } else {
            CanvasChange::None
        }
    }

    /// Apply a toolbar or text-input command.
    pub fn apply_command(&mut self, command: CanvasCommand) -> CanvasChange {
        match command {
            CanvasCommand::SelectTool { tool } => {
                self.set_tool(tool);
                CanvasChange::None
            }
            CanvasCommand::SelectColor { color } => {
                self.set_color(color);
                CanvasChange::None
            }
            CanvasCommand::Clear => {
                self.clear();
                CanvasChange::Cleared
            }
            CanvasCommand::Focus { id } => self.focus_text(id),
            CanvasCommand::EditText { id, text } => self.edit_text(id, text),
            CanvasCommand::Blur => self.blur(),
        }
    }

    fn pointer_down(&mut self, position: Point) -> CanvasChange {
        let tool = self.tool();
        let hit = self
            .document
            .element_at(position)
            .map(|e| (e.id(), e.kind()));

        match (tool, hit) {
            (ToolKind::Move, Some((id, _))) => {
                self.widgets.select(id);
                self.tool_manager.begin_drag(id);
                CanvasChange::ElementSelected(id)
            }
            (ToolKind::Eraser, Some((id, _))) => {
                self.remove_element(id);
                CanvasChange::ElementRemoved(id)
            }
            (ToolKind::TextBox, Some((id, ElementKind::TextBox))) => {
                self.widgets.enter_editing(id);
                CanvasChange::EditingStarted(id)
            }
            (ToolKind::Pen, _) => {
                self.tool_manager.begin_stroke(position);
                CanvasChange::None
            }
            (ToolKind::Move | ToolKind::Eraser, None) => CanvasChange::None,
            (placement, _) => match placement.placement_kind() {
                Some(kind) => self.place(kind, position),
                None => CanvasChange::None,
            },
        }
    }

    fn place(&mut self, kind: ElementKind, position: Point) -> CanvasChange {
        let color = self.color();
        let id = self
            .document
            .place_element(kind, position, color, &self.config);
        if kind == ElementKind::TextBox {
            self.widgets.enter_editing(id);
        } else {
            self.widgets.select(id);
        }
        CanvasChange::ElementPlaced(id)
    }

    fn pointer_move(&mut self, position: Point) -> CanvasChange {
        match self.tool() {
            ToolKind::Pen => {
                self.tool_manager.extend_stroke(position);
                CanvasChange::None
            }
            ToolKind::Move => {
                let Some(id) = self.tool_manager.dragging() else {
                    return CanvasChange::None;
                };
                match self.document.get_element_mut(id) {
                    Some(element) => {
                        element.set_position(position);
                        CanvasChange::ElementMoved(id)
                    }
                    None => CanvasChange::None,
                }
            }
            _ => CanvasChange::None,
        }
    }

    fn pointer_release(&mut self) -> CanvasChange {
        let mut change = CanvasChange::None;

        if let Some(points) = self.tool_manager.finish_stroke() {
            let color = self.color();
            if let Some(id) = self.document.commit_stroke(points, color) {
                change = CanvasChange::StrokeCommitted(id);
            }
        }
        self.tool_manager.cancel();

        // The text box tool keeps its edit target until the input blurs.
        if self.tool() != ToolKind::TextBox && self.widgets.selected().is_some() {
            self.widgets.clear_selection();
            if change == CanvasChange::None {
                change = CanvasChange::SelectionCleared;
            }
        }
        change
    }

    /// Remove the selected element, whatever tool is active.
    pub fn delete_selected(&mut self) -> CanvasChange {
        let Some(id) = self.widgets.selected() else {
            return CanvasChange::None;
        };
        self.remove_element(id);
        self.widgets.clear_selection();
        CanvasChange::ElementRemoved(id)
    }

    /// Enter text editing for a note or text box.
    pub fn focus_text(&mut self, id: ElementId) -> CanvasChange {
        match self.document.get_element(id) {
            Some(element) if element.kind().has_text() => {
                self.widgets.enter_editing(id);
                CanvasChange::EditingStarted(id)
            }
            _ => CanvasChange::None,
        }
    }

    /// Replace the text of the element being edited.
    ///
    /// Ignored unless `id` is the element currently in edit mode.
    pub fn edit_text(&mut self, id: ElementId, text: impl Into<String>) -> CanvasChange {
        if !self.widgets.is_editing(id) {
            log::warn!("Ignoring text edit for {} which is not being edited", id);
            return CanvasChange::None;
        }
        match self.document.get_element_mut(id) {
            Some(element) => {
                if element.set_text(text) {
                    CanvasChange::TextChanged(id)
                } else {
                    CanvasChange::None
                }
            }
            None => CanvasChange::None,
        }
    }

    /// Leave text editing and drop the selection.
    pub fn blur(&mut self) -> CanvasChange {
        if self.widgets.selected().is_none() {
            return CanvasChange::None;
        }
        self.widgets.clear_selection();
        CanvasChange::SelectionCleared
    }
}
