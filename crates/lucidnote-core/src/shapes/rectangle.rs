//! Rectangle element.

use super::{ElementId, ElementTrait, Layer, PaletteColor};
use crate::hit_test::box_contains;
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outlined rectangle with a translucent fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
    /// Palette color (fill and border).
    pub(crate) color: PaletteColor,
    pub(crate) layer: Layer,
}

impl Rectangle {
    /// Corner radius used when drawing the outline.
    pub const CORNER_RADIUS: f64 = 6.0;

    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64, color: PaletteColor, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            color,
            layer,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ElementTrait for Rectangle {
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
        RoundedRect::from_rect(self.as_rect(), Self::CORNER_RADIUS).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0, PaletteColor::Green, 2);
        assert!((rect.position.x - 10.0).abs() < f64::EPSILON);
        assert!((rect.position.y - 20.0).abs() < f64::EPSILON);
        assert!((rect.width - 100.0).abs() < f64::EPSILON);
        assert!((rect.height - 50.0).abs() < f64::EPSILON);
        assert_eq!(rect.layer(), 2);
    }

    #[test]
    fn test_hit_test() {
        let rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0, PaletteColor::Green, 2);
        assert!(rect.hit_test(Point::new(50.0, 50.0)));
        assert!(rect.hit_test(Point::new(100.0, 100.0)));
        assert!(!rect.hit_test(Point::new(150.0, 50.0)));
    }

    #[test]
    fn test_bounds() {
        let rect = Rectangle::new(Point::new(10.0, 20.0), 100.0, 50.0, PaletteColor::Green, 2);
        let bounds = rect.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_position_keeps_extent() {
        let mut rect = Rectangle::new(Point::new(0.0, 0.0), 100.0, 100.0, PaletteColor::Green, 2);
        rect.set_position(Point::new(40.0, 30.0));
        assert_eq!(rect.bounds(), Rect::new(40.0, 30.0, 140.0, 130.0));
    }
}
