//! SVG renderer backend.

use crate::projection::{DrawCommand, TextRun};
use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::{BezPath, Cap, Join, Rect, Stroke};
use peniko::Color;
use svg::Document;
use svg::node::Text as SvgText;
use svg::node::element as svg_element;

const FONT_SIZE: f64 = 14.0;
const LINE_HEIGHT: f64 = 18.0;
const TEXT_PADDING: f64 = 8.0;
const NOTE_CORNER_RADIUS: f64 = 4.0;
/// Gap between an element and its selection outline.
const OUTLINE_GAP: f64 = 3.0;

/// Renders a draw list into a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

/// `#rrggbb` and opacity of a color.
fn hex_and_opacity(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = (f64::from(rgba.a) / 255.0 * 1000.0).round() / 1000.0;
    (hex, opacity)
}

/// Set `attr` (and `attr-opacity` when not opaque) on an element.
fn paint<T: svg::Node>(mut node: T, attr: &str, color: Color) -> T {
    let (hex, opacity) = hex_and_opacity(color);
    node.assign(attr, hex);
    if opacity < 1.0 {
        node.assign(format!("{}-opacity", attr), opacity);
    }
    node
}

fn cap_name(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn join_name(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

fn rect_element(rect: Rect, corner_radius: f64) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", rect.x0)
        .set("y", rect.y0)
        .set("width", rect.width())
        .set("height", rect.height())
        .set("rx", corner_radius)
}

fn polyline_element(path: &BezPath, style: &Stroke, color: Color) -> svg_element::Path {
    let node = svg_element::Path::new()
        .set("d", path.to_svg())
        .set("fill", "none")
        .set("stroke-width", style.width)
        .set("stroke-linecap", cap_name(style.start_cap))
        .set("stroke-linejoin", join_name(style.join));
    paint(node, "stroke", color)
}

/// Text lines anchored at the top-left of `rect`.
fn text_element(rect: Rect, run: &TextRun, ctx: &RenderContext) -> svg_element::Text {
    let color = if run.placeholder {
        ctx.placeholder_color
    } else {
        ctx.text_color
    };
    let x = rect.x0 + TEXT_PADDING;
    let mut text = svg_element::Text::new("")
        .set("x", x)
        .set("y", rect.y0 + TEXT_PADDING + FONT_SIZE)
        .set("font-size", FONT_SIZE);
    text = paint(text, "fill", color);
    for (i, line) in run.text.lines().enumerate() {
        let dy = if i == 0 { 0.0 } else { LINE_HEIGHT };
        let tspan = svg_element::TSpan::new("")
            .set("x", x)
            .set("dy", dy)
            .add(SvgText::new(line));
        text = text.add(tspan);
    }
    text
}

/// Selection outline: dashed when selected, solid while editing.
fn outline_element(rect: Rect, editing: bool, ctx: &RenderContext) -> svg_element::Rectangle {
    let outline = rect.inflate(OUTLINE_GAP, OUTLINE_GAP);
    let mut node = rect_element(outline, 0.0)
        .set("fill", "none")
        .set("stroke-width", 1.5);
    if !editing {
        node = node.set("stroke-dasharray", "4 4");
    }
    paint(node, "stroke", ctx.selection_color)
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last built document.
    pub fn svg(&self) -> &str {
        &self.output
    }

    /// Take the last built document, leaving the renderer empty.
    pub fn take_svg(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Build and return a document in one call.
    pub fn render(&mut self, ctx: &RenderContext) -> RenderResult<String> {
        self.build_scene(ctx)?;
        Ok(self.take_svg())
    }

    fn render_command(document: Document, command: &DrawCommand, ctx: &RenderContext) -> Document {
        match command {
            DrawCommand::Polyline { path, style, color } => {
                document.add(polyline_element(path, style, *color))
            }
            DrawCommand::Note {
                rect,
                fill,
                text,
                selected,
                editing,
                ..
            } => {
                let card = paint(rect_element(*rect, NOTE_CORNER_RADIUS), "fill", *fill);
                let document = document.add(card).add(text_element(*rect, text, ctx));
                if *selected {
                    document.add(outline_element(*rect, *editing, ctx))
                } else {
                    document
                }
            }
            DrawCommand::Rectangle {
                rect,
                corner_radius,
                fill,
                border,
                border_width,
                selected,
                ..
            } => {
                let node = rect_element(*rect, *corner_radius).set("stroke-width", *border_width);
                let node = paint(paint(node, "fill", *fill), "stroke", *border);
                let document = document.add(node);
                if *selected {
                    document.add(outline_element(*rect, false, ctx))
                } else {
                    document
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                border,
                border_width,
                selected,
                ..
            } => {
                let node = svg_element::Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
                    .set("stroke-width", *border_width);
                let node = paint(paint(node, "fill", *fill), "stroke", *border);
                let document = document.add(node);
                if *selected {
                    let bounds = Rect::from_center_size(*center, (radius * 2.0, radius * 2.0));
                    document.add(outline_element(bounds, false, ctx))
                } else {
                    document
                }
            }
            DrawCommand::Text {
                rect,
                text,
                selected,
                editing,
                ..
            } => {
                let document = document.add(text_element(*rect, text, ctx));
                if *selected {
                    document.add(outline_element(*rect, *editing, ctx))
                } else {
                    document
                }
            }
        }
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;

        let size = ctx.viewport_size;
        let background = svg_element::Rectangle::new()
            .set("width", "100%")
            .set("height", "100%");
        let mut document = Document::new()
            .set("width", size.width)
            .set("height", size.height)
            .set("viewBox", format!("0 0 {} {}", size.width, size.height))
            .add(paint(background, "fill", self.background_color(ctx)));

        for command in ctx.draw_list.iter() {
            document = Self::render_command(document, command, ctx);
        }
        self.output = document.to_string();

        log::debug!("Built SVG scene with {} commands", ctx.draw_list.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::DrawList;
    use crate::renderer::RendererError;
    use kurbo::{Point, Size};
    use lucidnote_core::canvas::Canvas;
    use lucidnote_core::input::{CanvasCommand, PointerEvent};
    use lucidnote_core::tools::ToolKind;

    fn press(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(x, y),
        });
    }

    fn release(canvas: &mut Canvas, x: f64, y: f64) {
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(x, y),
        });
    }

    fn render(canvas: &Canvas) -> String {
        let list = DrawList::from_canvas(canvas);
        let ctx = RenderContext::new(&list, Size::new(800.0, 600.0));
        SvgRenderer::new().render(&ctx).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let svg = render(&Canvas::new());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r##"fill="#fafafa""##));
        assert!(svg.contains(r#"width="800""#));
    }

    #[test]
    fn test_shapes_and_ink() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Circle);
        press(&mut canvas, 200.0, 200.0);
        release(&mut canvas, 200.0, 200.0);

        canvas.set_tool(ToolKind::Pen);
        press(&mut canvas, 0.0, 0.0);
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 5.0),
        });
        release(&mut canvas, 10.0, 5.0);

        let svg = render(&canvas);
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"r="50""#));
        assert!(svg.contains(r#"fill-opacity="0.251""#));
        assert!(svg.contains(r##"stroke="#ffd166""##));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r#"stroke-linejoin="round""#));
        assert!(svg.find("<circle").unwrap() < svg.find("<path").unwrap());
        // Nothing is selected after release.
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_note_text_is_escaped() {
        let mut canvas = Canvas::new();
        press(&mut canvas, 10.0, 10.0);
        release(&mut canvas, 10.0, 10.0);
        let id = canvas.document.elements()[0].id();

        let svg = render(&canvas);
        assert!(svg.contains("Add your note..."));

        canvas.apply_command(CanvasCommand::Focus { id });
        canvas.apply_command(CanvasCommand::EditText {
            id,
            text: "a < b & c\nsecond".to_string(),
        });
        let svg = render(&canvas);
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(svg.contains("second"));
        assert!(!svg.contains("Add your note..."));
        // Editing outline is solid.
        assert!(svg.contains(r##"stroke="#3b82f6""##));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_selected_outline_is_dashed() {
        let mut canvas = Canvas::new();
        canvas.set_tool(ToolKind::Rectangle);
        press(&mut canvas, 10.0, 10.0);

        let svg = render(&canvas);
        assert!(svg.contains(r#"stroke-dasharray="4 4""#));
    }

    #[test]
    fn test_invalid_viewport() {
        let list = DrawList::default();
        let ctx = RenderContext::new(&list, Size::new(0.0, 600.0));
        assert!(matches!(
            SvgRenderer::new().render(&ctx),
            Err(RendererError::InvalidViewport(..))
        ));
    }
}
