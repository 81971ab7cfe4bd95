//! Sticky note element.

use super::{ElementId, ElementTrait, Layer, PaletteColor};
use crate::hit_test::box_contains;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled note card with editable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Note body.
    #[serde(default)]
    pub text: String,
    pub(crate) color: PaletteColor,
    pub(crate) layer: Layer,
}

impl StickyNote {
    /// Placeholder shown while the note is empty.
    pub const PLACEHOLDER: &'static str = "Add your note...";

    /// Create a new, empty note.
    pub fn new(position: Point, width: f64, height: f64, color: PaletteColor, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            text: String::new(),
            color,
            layer,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, (self.width, self.height))
    }
}

impl ElementTrait for StickyNote {
    fn id(&self) -> ElementId {
        self.id
    }

    fn layer(&self) -> Layer {
        self.layer
    }

    fn color(&self) -> PaletteColor {
        self.color
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point) -> bool {
        box_contains(self.as_rect(), point)
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_is_empty() {
        let note = StickyNote::new(Point::new(10.0, 10.0), 150.0, 150.0, PaletteColor::Yellow, 2);
        assert!(note.text.is_empty());
        assert!(note.hit_test(Point::new(160.0, 160.0)));
        assert!(!note.hit_test(Point::new(161.0, 160.0)));
    }
}
