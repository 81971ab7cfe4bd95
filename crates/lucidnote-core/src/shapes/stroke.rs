//! Freehand ink stroke.

use super::{Layer, PaletteColor, StrokeId};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A committed freehand path (series of points in capture order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    /// Points in the order they were captured.
    pub(crate) points: Vec<Point>,
    pub(crate) color: PaletteColor,
    pub(crate) layer: Layer,
}

impl Stroke {
    /// Minimum number of samples for a stroke to be committed.
    pub const MIN_POINTS: usize = 2;

    /// Line width of every stroke.
    pub const WIDTH: f64 = 2.0;

    /// Build a stroke from captured samples.
    ///
    /// Returns `None` when fewer than [`Stroke::MIN_POINTS`] samples were recorded.
    pub fn from_points(points: Vec<Point>, color: PaletteColor, layer: Layer) -> Option<Self> {
        if points.len() < Self::MIN_POINTS {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            points,
            color,
            layer,
        })
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn stroke_width(&self) -> f64 {
        Self::WIDTH
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Bounding box of the samples (ignores stroke width).
    pub fn bounds(&self) -> Rect {
        polyline_bounds(&self.points)
    }

    /// Open polyline through the samples.
    pub fn to_path(&self) -> BezPath {
        polyline_path(&self.points)
    }
}

/// Build an open polyline path through `points`.
pub fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

fn polyline_bounds(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sample_rejected() {
        let stroke = Stroke::from_points(vec![Point::new(1.0, 1.0)], PaletteColor::Yellow, 2);
        assert!(stroke.is_none());
    }

    #[test]
    fn test_points_kept_in_order() {
        let pts = vec![Point::new(5.0, 5.0), Point::new(0.0, 0.0), Point::new(3.0, 9.0)];
        let stroke = Stroke::from_points(pts.clone(), PaletteColor::Green, 4).unwrap();
        assert_eq!(stroke.points(), pts.as_slice());
        assert_eq!(stroke.bounds(), Rect::new(0.0, 0.0, 5.0, 9.0));
        assert_eq!(stroke.layer(), 4);
        assert!((stroke.stroke_width() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_width_is_ignored() {
        let json = format!(
            r#"{{"id":"{}","points":[{{"x":0.0,"y":0.0}},{{"x":1.0,"y":1.0}}],"color":"pink","stroke_width":9.0,"layer":3}}"#,
            Uuid::new_v4()
        );
        let stroke: Stroke = serde_json::from_str(&json).unwrap();
        assert!((stroke.stroke_width() - Stroke::WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_polyline_path_segments() {
        let path = polyline_path(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(path.elements().len(), 3);
    }
}
