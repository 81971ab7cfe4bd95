//! Pure mapping from canvas state to a layered list of draw commands.

use kurbo::{BezPath, Cap, Join, Point, Rect, Stroke};
use lucidnote_core::canvas::Canvas;
use lucidnote_core::shapes::{
    Element, ElementId, ElementTrait, Layer, PaletteColor, Rectangle, StickyNote, TextBox,
    polyline_path,
};
use lucidnote_core::widget::WidgetManager;
use peniko::Color;

/// Alpha applied to rectangle and circle fills.
pub const SHAPE_FILL_ALPHA: u8 = 0x40;

/// Border width of rectangles and circles.
pub const SHAPE_BORDER_WIDTH: f64 = 2.0;

/// Text shown inside a note or text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    /// True when `text` is the empty-state placeholder.
    pub placeholder: bool,
}

impl TextRun {
    fn new(text: &str, placeholder: &str) -> Self {
        if text.is_empty() {
            Self {
                text: placeholder.to_string(),
                placeholder: true,
            }
        } else {
            Self {
                text: text.to_string(),
                placeholder: false,
            }
        }
    }
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Open polyline (committed or in-progress ink).
    Polyline {
        path: BezPath,
        style: Stroke,
        color: Color,
    },
    /// Filled card with a text overlay.
    Note {
        id: ElementId,
        rect: Rect,
        fill: Color,
        text: TextRun,
        selected: bool,
        editing: bool,
    },
    Rectangle {
        id: ElementId,
        rect: Rect,
        corner_radius: f64,
        fill: Color,
        border: Color,
        border_width: f64,
        selected: bool,
    },
    Circle {
        id: ElementId,
        center: Point,
        radius: f64,
        fill: Color,
        border: Color,
        border_width: f64,
        selected: bool,
    },
    /// Borderless text.
    Text {
        id: ElementId,
        rect: Rect,
        text: TextRun,
        selected: bool,
        editing: bool,
    },
}

/// A draw command tagged with its draw-order key.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    pub command: DrawCommand,
}

/// Ink currently being drawn.
#[derive(Debug, Clone, Copy)]
pub struct PendingStroke<'a> {
    pub points: &'a [Point],
    pub color: PaletteColor,
    pub width: f64,
    /// Layer the stroke would receive if committed now.
    pub layer: Layer,
}

/// Draw commands in ascending layer order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    /// Project a canvas session.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let pending = PendingStroke {
            points: canvas.in_progress_points(),
            color: canvas.color(),
            width: lucidnote_core::shapes::Stroke::WIDTH,
            layer: canvas.document.next_layer(),
        };
        project(
            canvas.document.elements(),
            canvas.document.strokes(),
            Some(pending),
            &canvas.widgets,
        )
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.items.iter().map(|item| &item.command)
    }
}

fn ink_style(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

fn shape_fill(color: PaletteColor) -> Color {
    color.rgba().with_alpha(SHAPE_FILL_ALPHA).into()
}

fn element_command(element: &Element, widgets: &WidgetManager) -> DrawCommand {
    let id = element.id();
    let state = widgets.state(id);
    let selected = state.is_selected();
    let editing = state.is_editing();
    match element {
        Element::StickyNote(note) => DrawCommand::Note {
            id,
            rect: note.as_rect(),
            fill: note.color().color(),
            text: TextRun::new(&note.text, StickyNote::PLACEHOLDER),
            selected,
            editing,
        },
        Element::Rectangle(rect) => DrawCommand::Rectangle {
            id,
            rect: rect.as_rect(),
            corner_radius: Rectangle::CORNER_RADIUS,
            fill: shape_fill(rect.color()),
            border: rect.color().color(),
            border_width: SHAPE_BORDER_WIDTH,
            selected,
        },
        Element::Circle(circle) => DrawCommand::Circle {
            id,
            center: circle.center,
            radius: circle.radius,
            fill: shape_fill(circle.color()),
            border: circle.color().color(),
            border_width: SHAPE_BORDER_WIDTH,
            selected,
        },
        Element::TextBox(text_box) => DrawCommand::Text {
            id,
            rect: text_box.as_rect(),
            text: TextRun::new(&text_box.text, TextBox::PLACEHOLDER),
            selected,
            editing,
        },
    }
}

/// Map elements, strokes, pending ink and selection to a [`DrawList`].
///
/// Pending ink with fewer than two samples is not drawn.
pub fn project(
    elements: &[Element],
    strokes: &[lucidnote_core::shapes::Stroke],
    pending: Option<PendingStroke<'_>>,
    widgets: &WidgetManager,
) -> DrawList {
    let mut items = Vec::with_capacity(elements.len() + strokes.len() + 1);

    for stroke in strokes {
        items.push(DrawItem {
            layer: stroke.layer(),
            command: DrawCommand::Polyline {
                path: stroke.to_path(),
                style: ink_style(stroke.stroke_width()),
                color: stroke.color().color(),
            },
        });
    }

    for element in elements {
        items.push(DrawItem {
            layer: element.layer(),
            command: element_command(element, widgets),
        });
    }

    if let Some(pending) = pending.filter(|p| p.points.len() >= 2) {
        items.push(DrawItem {
            layer: pending.layer,
            command: DrawCommand::Polyline {
                path: polyline_path(pending.points),
                style: ink_style(pending.width),
                color: pending.color.color(),
            },
        });
    }

    items.sort_by_key(|item| item.layer);
    DrawList { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucidnote_core::input::PointerEvent;
    use lucidnote_core::tools::ToolKind;

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_empty_canvas() {
        assert!(DrawList::from_canvas(&Canvas::new()).is_empty());
    }

    #[test]
    fn test_layer_order_interleaves_strokes_and_elements() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        canvas.handle_pointer_event(down(0.0, 0.0));
        canvas.handle_pointer_event(up(0.0, 0.0));

        canvas.set_tool(ToolKind::Pen);
        canvas.handle_pointer_event(down(0.0, 0.0));
        canvas.handle_pointer_event(moved(10.0, 10.0));
        canvas.handle_pointer_event(up(10.0, 10.0));

        canvas.set_tool(ToolKind::StickyNote);
        canvas.handle_pointer_event(down(5.0, 5.0));
        canvas.handle_pointer_event(up(5.0, 5.0));

        let list = DrawList::from_canvas(&canvas);
        let layers: Vec<_> = list.items().iter().map(|i| i.layer).collect();
        assert_eq!(layers, vec![2, 3, 4]);
        assert!(matches!(list.items()[0].command, DrawCommand::Rectangle { .. }));
        assert!(matches!(list.items()[1].command, DrawCommand::Polyline { .. }));
        assert!(matches!(list.items()[2].command, DrawCommand::Note { .. }));
    }

    #[test]
    fn test_ink_style_is_round() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Pen);
        canvas.handle_pointer_event(down(0.0, 0.0));
        canvas.handle_pointer_event(moved(5.0, 0.0));

        // In-progress ink sits above everything committed.
        let list = DrawList::from_canvas(&canvas);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].layer, canvas.document.next_layer());
        match &list.items()[0].command {
            DrawCommand::Polyline { style, color, .. } => {
                assert_eq!(style.width, 2.0);
                assert_eq!(style.start_cap, Cap::Round);
                assert_eq!(style.join, Join::Round);
                assert_eq!(*color, PaletteColor::Yellow.color());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_single_sample_pending_ink_hidden() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Pen);
        canvas.handle_pointer_event(down(0.0, 0.0));
        assert!(DrawList::from_canvas(&canvas).is_empty());
    }

    #[test]
    fn test_shape_fill_is_translucent() {
        let mut canvas = Canvas::new();
        canvas.set_color(PaletteColor::Pink);
        canvas.set_tool(ToolKind::Circle);
        canvas.handle_pointer_event(down(200.0, 200.0));

        let list = DrawList::from_canvas(&canvas);
        match &list.items()[0].command {
            DrawCommand::Circle {
                fill,
                border,
                border_width,
                radius,
                selected,
                ..
            } => {
                assert_eq!(fill.to_rgba8().a, SHAPE_FILL_ALPHA);
                assert_eq!(*border, PaletteColor::Pink.color());
                assert_eq!(*border_width, 2.0);
                assert_eq!(*radius, 50.0);
                assert!(*selected);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_text_placeholders() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::TextBox);
        canvas.handle_pointer_event(down(0.0, 0.0));
        canvas.handle_pointer_event(up(0.0, 0.0));

        let list = DrawList::from_canvas(&canvas);
        match &list.items()[0].command {
            DrawCommand::Text { text, editing, .. } => {
                assert!(text.placeholder);
                assert_eq!(text.text, "Add text...");
                assert!(*editing);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
