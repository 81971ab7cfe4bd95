//! Circle element.

use super::{ElementId, ElementTrait, Layer, PaletteColor};
use crate::hit_test::circle_contains;
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle anchored at its center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ElementId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    pub(crate) color: PaletteColor,
    pub(crate) layer: Layer,
}

impl Circle {
    /// Create a new circle.
    pub fn new(center: Point, radius: f64, color: PaletteColor, layer: Layer) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            color,
            layer,
        }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ElementTrait for Circle {
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
        self.center
    }

    fn set_position(&mut self, position: Point) {
        self.center = position;
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn hit_test(&self, point: Point) -> bool {
        circle_contains(self.center, self.radius, point)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_center() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0, PaletteColor::Pink, 2);
        assert!(circle.hit_test(Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_hit_test_edge() {
        let circle = Circle::new(Point::new(0.0, 0.0), 10.0, PaletteColor::Pink, 2);
        assert!(circle.hit_test(Point::new(10.0, 0.0)));
        assert!(!circle.hit_test(Point::new(15.0, 0.0)));
        assert!(!circle.hit_test(Point::new(9.0, 9.0)));
    }

    #[test]
    fn test_recenter_keeps_radius() {
        let mut circle = Circle::new(Point::new(200.0, 200.0), 50.0, PaletteColor::Pink, 2);
        circle.set_position(Point::new(10.0, 20.0));
        assert_eq!(circle.center, Point::new(10.0, 20.0));
        assert!((circle.radius - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0, PaletteColor::Pink, 2);
        let bounds = circle.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }
}
