//! Borderless text box element.

use super::{ElementId, ElementTrait, Layer, PaletteColor};
use crate::hit_test::box_contains;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-standing text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub(crate) id: ElementId,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub text: String,
    pub(crate) color: PaletteColor,
    pub(crate) layer: Layer,
}

impl TextBox {
    /// Placeholder shown while the box is empty.
    pub const PLACEHOLDER: &'static str = "Add text...";

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

impl ElementTrait for TextBox {
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
