//! Element and stroke definitions for the ideation canvas.

mod circle;
mod note;
mod rectangle;
mod stroke;
mod text_box;

pub use circle::Circle;
pub use note::StickyNote;
pub use rectangle::Rectangle;
pub use stroke::{Stroke, polyline_path};
pub use text_box::TextBox;

use crate::config::CanvasConfig;
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// Draw-order key. Higher values draw on top.
pub type Layer = u64;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The fixed canvas palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    /// `#FFD166`
    #[default]
    Yellow,
    /// `#EF476F`
    Pink,
    /// `#26547C`
    DarkBlue,
    /// `#06D6A0`
    Green,
    /// `#66D7D1`
    Teal,
    /// `#FCFCFC`
    White,
}

impl PaletteColor {
    /// All palette entries in toolbar order.
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Yellow,
        PaletteColor::Pink,
        PaletteColor::DarkBlue,
        PaletteColor::Green,
        PaletteColor::Teal,
        PaletteColor::White,
    ];

    /// Opaque RGBA value of this entry.
    pub const fn rgba(self) -> SerializableColor {
        match self {
            PaletteColor::Yellow => SerializableColor::new(0xFF, 0xD1, 0x66, 0xFF),
            PaletteColor::Pink => SerializableColor::new(0xEF, 0x47, 0x6F, 0xFF),
            PaletteColor::DarkBlue => SerializableColor::new(0x26, 0x54, 0x7C, 0xFF),
            PaletteColor::Green => SerializableColor::new(0x06, 0xD6, 0xA0, 0xFF),
            PaletteColor::Teal => SerializableColor::new(0x66, 0xD7, 0xD1, 0xFF),
            PaletteColor::White => SerializableColor::new(0xFC, 0xFC, 0xFC, 0xFF),
        }
    }

    /// As a peniko Color.
    pub fn color(self) -> Color {
        self.rgba().into()
    }

    /// Look up a palette entry by its `#rrggbb` hex code (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.rgba().to_hex().eq_ignore_ascii_case(hex.trim()))
    }
}

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    StickyNote,
    Rectangle,
    Circle,
    TextBox,
}

impl ElementKind {
    /// Whether elements of this kind carry editable text.
    pub fn has_text(self) -> bool {
        matches!(self, ElementKind::StickyNote | ElementKind::TextBox)
    }
}

/// Common behavior for all placed elements.
pub trait ElementTrait {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Draw-order key.
    fn layer(&self) -> Layer;

    /// Palette color chosen at creation.
    fn color(&self) -> PaletteColor;

    /// Anchor position (top-left, or center for circles).
    fn position(&self) -> Point;

    /// Move the anchor to `position`. Extent is unchanged.
    fn set_position(&mut self, position: Point);

    /// Axis-aligned bounding box.
    fn bounds(&self) -> Rect;

    /// Check if a point lies inside the element.
    fn hit_test(&self, point: Point) -> bool;

    /// Outline path for rendering.
    fn to_path(&self) -> BezPath;
}

/// Enum wrapper for all element types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    StickyNote(StickyNote),
    Rectangle(Rectangle),
    Circle(Circle),
    TextBox(TextBox),
}

impl Element {
    /// Create a new element of `kind` with the configured default extent.
    pub fn create(
        kind: ElementKind,
        position: Point,
        color: PaletteColor,
        layer: Layer,
        config: &CanvasConfig,
    ) -> Self {
        match kind {
            ElementKind::StickyNote => {
                let size = config.sticky_note_size;
                Element::StickyNote(StickyNote::new(position, size.width, size.height, color, layer))
            }
            ElementKind::Rectangle => {
                let size = config.rectangle_size;
                Element::Rectangle(Rectangle::new(position, size.width, size.height, color, layer))
            }
            ElementKind::Circle => {
                Element::Circle(Circle::new(position, config.circle_radius, color, layer))
            }
            ElementKind::TextBox => {
                let size = config.text_box_size;
                Element::TextBox(TextBox::new(position, size.width, size.height, color, layer))
            }
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::StickyNote(_) => ElementKind::StickyNote,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::TextBox(_) => ElementKind::TextBox,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::StickyNote(e) => e.id(),
            Element::Rectangle(e) => e.id(),
            Element::Circle(e) => e.id(),
            Element::TextBox(e) => e.id(),
        }
    }

    pub fn layer(&self) -> Layer {
        match self {
            Element::StickyNote(e) => e.layer(),
            Element::Rectangle(e) => e.layer(),
            Element::Circle(e) => e.layer(),
            Element::TextBox(e) => e.layer(),
        }
    }

    pub fn color(&self) -> PaletteColor {
        match self {
            Element::StickyNote(e) => e.color(),
            Element::Rectangle(e) => e.color(),
            Element::Circle(e) => e.color(),
            Element::TextBox(e) => e.color(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Element::StickyNote(e) => e.position(),
            Element::Rectangle(e) => e.position(),
            Element::Circle(e) => e.position(),
            Element::TextBox(e) => e.position(),
        }
    }

    pub fn set_position(&mut self, position: Point) {
        match self {
            Element::StickyNote(e) => e.set_position(position),
            Element::Rectangle(e) => e.set_position(position),
            Element::Circle(e) => e.set_position(position),
            Element::TextBox(e) => e.set_position(position),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::StickyNote(e) => e.bounds(),
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::TextBox(e) => e.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self {
            Element::StickyNote(e) => e.hit_test(point),
            Element::Rectangle(e) => e.hit_test(point),
            Element::Circle(e) => e.hit_test(point),
            Element::TextBox(e) => e.hit_test(point),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Element::StickyNote(e) => e.to_path(),
            Element::Rectangle(e) => e.to_path(),
            Element::Circle(e) => e.to_path(),
            Element::TextBox(e) => e.to_path(),
        }
    }

    /// Text content, for kinds that carry it.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::StickyNote(n) => Some(&n.text),
            Element::TextBox(t) => Some(&t.text),
            Element::Rectangle(_) | Element::Circle(_) => None,
        }
    }

    /// Replace the text content. Returns false for kinds without text.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self {
            Element::StickyNote(n) => {
                n.text = text.into();
                true
            }
            Element::TextBox(t) => {
                t.text = text.into();
                true
            }
            Element::Rectangle(_) | Element::Circle(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extents() {
        let config = CanvasConfig::default();
        let origin = Point::new(0.0, 0.0);

        let note = Element::create(ElementKind::StickyNote, origin, PaletteColor::Yellow, 2, &config);
        assert_eq!(note.bounds(), Rect::new(0.0, 0.0, 150.0, 150.0));

        let rect = Element::create(ElementKind::Rectangle, origin, PaletteColor::Yellow, 2, &config);
        assert_eq!(rect.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));

        let text = Element::create(ElementKind::TextBox, origin, PaletteColor::Yellow, 2, &config);
        assert_eq!(text.bounds(), Rect::new(0.0, 0.0, 150.0, 50.0));

        let circle = Element::create(ElementKind::Circle, origin, PaletteColor::Yellow, 2, &config);
        assert_eq!(circle.bounds(), Rect::new(-50.0, -50.0, 50.0, 50.0));
    }

    #[test]
    fn test_text_only_on_text_kinds() {
        let config = CanvasConfig::default();
        let mut rect =
            Element::create(ElementKind::Rectangle, Point::ZERO, PaletteColor::Pink, 2, &config);
        assert_eq!(rect.text(), None);
        assert!(!rect.set_text("nope"));

        let mut note =
            Element::create(ElementKind::StickyNote, Point::ZERO, PaletteColor::Pink, 2, &config);
        assert_eq!(note.text(), Some(""));
        assert!(note.set_text("idea"));
        assert_eq!(note.text(), Some("idea"));
    }

    #[test]
    fn test_palette_hex() {
        assert_eq!(PaletteColor::Yellow.rgba().to_hex(), "#FFD166");
        assert_eq!(PaletteColor::from_hex("#26547c"), Some(PaletteColor::DarkBlue));
        assert_eq!(PaletteColor::from_hex("#000000"), None);
    }

    #[test]
    fn test_color_round_trip() {
        let color: Color = PaletteColor::Teal.color();
        let back = SerializableColor::from(color);
        assert_eq!(back, PaletteColor::Teal.rgba());
    }
}
