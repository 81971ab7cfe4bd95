//! Canvas document and session state.

use crate::config::CanvasConfig;
use crate::hit_test::topmost_at;
use crate::shapes::{
    Element, ElementId, ElementKind, Layer, PaletteColor, Stroke, StrokeId,
};
use crate::tools::{ToolKind, ToolManager};
use crate::widget::WidgetManager;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Value of the layer counter on an empty canvas.
///
/// The first created entity receives `INITIAL_LAYER + 1`.
pub const INITIAL_LAYER: Layer = 1;

/// The element and stroke store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Placed elements in creation order.
    elements: Vec<Element>,
    /// Committed strokes in creation order.
    strokes: Vec<Stroke>,
    /// Highest layer handed out so far.
    layer_counter: Layer,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            strokes: Vec::new(),
            layer_counter: INITIAL_LAYER,
        }
    }

    /// Layer the next created entity will receive.
    pub fn next_layer(&self) -> Layer {
        self.layer_counter + 1
    }

    fn allocate_layer(&mut self) -> Layer {
        self.layer_counter += 1;
        self.layer_counter
    }

    /// Create an element of `kind` at `position` on top of everything else.
    pub fn place_element(
        &mut self,
        kind: ElementKind,
        position: Point,
        color: PaletteColor,
        config: &CanvasConfig,
    ) -> ElementId {
        let layer = self.allocate_layer();
        let element = Element::create(kind, position, color, layer, config);
        let id = element.id();
        log::debug!("Placed {:?} {} at ({}, {}) on layer {}", kind, id, position.x, position.y, layer);
        self.elements.push(element);
        id
    }

    /// Commit captured pen samples as a stroke.
    ///
    /// Fewer than two samples are discarded and no layer is consumed.
    pub fn commit_stroke(
        &mut self,
        points: Vec<Point>,
        color: PaletteColor,
    ) -> Option<StrokeId> {
        if points.len() < Stroke::MIN_POINTS {
            log::debug!("Discarding stroke with {} sample(s)", points.len());
            return None;
        }
        let layer = self.allocate_layer();
        let stroke = Stroke::from_points(points, color, layer)?;
        let id = stroke.id();
        log::debug!("Committed stroke {} ({} samples) on layer {}", id, stroke.points().len(), layer);
        self.strokes.push(stroke);
        Some(id)
    }

    /// Remove an element from the document.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        let removed = self.elements.remove(index);
        log::debug!("Removed {:?} {}", removed.kind(), id);
        Some(removed)
    }

    /// Remove every element and stroke and restart the layer sequence.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.strokes.clear();
        self.layer_counter = INITIAL_LAYER;
    }

    /// Get an element by ID.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Elements in creation order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Strokes in creation order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Topmost element under `point`.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        topmost_at(&self.elements, point)
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.strokes.is_empty()
    }

    /// Number of elements plus strokes.
    pub fn len(&self) -> usize {
        self.elements.len() + self.strokes.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    ///
    /// The layer counter is raised to at least the highest stored layer so
    /// new content always lands on top.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut doc: Self = serde_json::from_str(json)?;
        let highest = doc
            .elements
            .iter()
            .map(Element::layer)
            .chain(doc.strokes.iter().map(Stroke::layer))
            .max()
            .unwrap_or(INITIAL_LAYER);
        doc.layer_counter = doc.layer_counter.max(highest).max(INITIAL_LAYER);
        Ok(doc)
    }
}

/// Runtime canvas session: the document plus tool and selection state.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// Tool manager.
    pub tool_manager: ToolManager,
    /// Selection and edit state.
    pub widgets: WidgetManager,
    /// Defaults for new content.
    pub config: CanvasConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::with_config(CanvasConfig::default())
    }

    /// Create a canvas using custom defaults.
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            document: CanvasDocument::new(),
            tool_manager: ToolManager::with_color(config.default_color),
            widgets: WidgetManager::new(),
            config,
        }
    }

    /// Create a canvas around an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            ..Self::new()
        }
    }

    /// Currently active tool.
    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    /// Set the current tool, cancelling any in-progress gesture.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool_manager.set_tool(tool);
    }

    /// Color applied to new content.
    pub fn color(&self) -> PaletteColor {
        self.tool_manager.current_color
    }

    /// Set the color for new content.
    pub fn set_color(&mut self, color: PaletteColor) {
        self.tool_manager.set_color(color);
    }

    /// Selected element, if any.
    pub fn selection(&self) -> Option<ElementId> {
        self.widgets.selected()
    }

    /// Element whose text is being edited, if any.
    pub fn editing_element(&self) -> Option<ElementId> {
        self.widgets.editing()
    }

    /// Samples of the stroke being drawn.
    pub fn in_progress_points(&self) -> &[Point] {
        self.tool_manager.in_progress_points()
    }

    /// Remove an element and drop it from the selection.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        self.widgets.remove(id);
        self.document.remove_element(id)
    }

    /// Reset the canvas: elements, strokes, layer sequence, gesture and selection.
    pub fn clear(&mut self) {
        self.document.clear();
        self.tool_manager.cancel();
        self.widgets.clear_selection();
        log::info!("Canvas cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(doc: &mut CanvasDocument, kind: ElementKind, x: f64, y: f64) -> ElementId {
        doc.place_element(kind, Point::new(x, y), PaletteColor::Yellow, &CanvasConfig::default())
    }

    #[test]
    fn test_document_creation() {
        let doc = CanvasDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.next_layer(), INITIAL_LAYER + 1);
    }

    #[test]
    fn test_layers_strictly_increase() {
        let mut doc = CanvasDocument::new();
        let a = place(&mut doc, ElementKind::Rectangle, 0.0, 0.0);
        let stroke = doc
            .commit_stroke(
                vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
                PaletteColor::Pink,
            )
            .unwrap();
        let b = place(&mut doc, ElementKind::Circle, 0.0, 0.0);

        let la = doc.get_element(a).unwrap().layer();
        let ls = doc.strokes().iter().find(|s| s.id() == stroke).unwrap().layer();
        let lb = doc.get_element(b).unwrap().layer();
        assert!(la < ls && ls < lb);
    }

    #[test]
    fn test_short_stroke_does_not_consume_layer() {
        let mut doc = CanvasDocument::new();
        let before = doc.next_layer();
        assert!(doc.commit_stroke(vec![Point::new(3.0, 3.0)], PaletteColor::Pink).is_none());
        assert_eq!(doc.next_layer(), before);
        assert!(doc.strokes().is_empty());
    }

    #[test]
    fn test_remove_element() {
        let mut doc = CanvasDocument::new();
        let a = place(&mut doc, ElementKind::Rectangle, 0.0, 0.0);
        let b = place(&mut doc, ElementKind::Rectangle, 10.0, 10.0);

        let removed = doc.remove_element(a);
        assert!(removed.is_some());
        assert!(doc.get_element(a).is_none());
        assert!(doc.get_element(b).is_some());
        assert!(doc.remove_element(a).is_none());
    }

    #[test]
    fn test_element_at() {
        let mut doc = CanvasDocument::new();
        let a = place(&mut doc, ElementKind::Rectangle, 0.0, 0.0);
        let b = place(&mut doc, ElementKind::Rectangle, 50.0, 50.0);

        assert_eq!(doc.element_at(Point::new(75.0, 75.0)).map(|e| e.id()), Some(b));
        assert_eq!(doc.element_at(Point::new(25.0, 25.0)).map(|e| e.id()), Some(a));
        assert!(doc.element_at(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_clear_resets_layers() {
        let mut doc = CanvasDocument::new();
        place(&mut doc, ElementKind::StickyNote, 0.0, 0.0);
        place(&mut doc, ElementKind::TextBox, 0.0, 0.0);
        doc.clear();

        assert!(doc.is_empty());
        assert_eq!(doc.next_layer(), INITIAL_LAYER + 1);
        let again = doc.clone();
        doc.clear();
        assert_eq!(doc, again);
    }

    #[test]
    fn test_json_round_trip_keeps_layer_sequence() {
        let mut doc = CanvasDocument::new();
        let id = place(&mut doc, ElementKind::StickyNote, 10.0, 10.0);
        doc.get_element_mut(id).unwrap().set_text("hello");
        doc.commit_stroke(
            vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)],
            PaletteColor::Green,
        );

        let json = doc.to_json().unwrap();
        let restored = CanvasDocument::from_json(&json).unwrap();
        assert_eq!(restored, doc);
        assert_eq!(restored.next_layer(), doc.next_layer());
    }

    #[test]
    fn test_canvas_clear_resets_selection() {
        let mut canvas = Canvas::new();
        let id = place(&mut canvas.document, ElementKind::Rectangle, 0.0, 0.0);
        canvas.widgets.select(id);
        canvas.clear();

        assert!(canvas.selection().is_none());
        assert!(canvas.document.is_empty());
    }
}
