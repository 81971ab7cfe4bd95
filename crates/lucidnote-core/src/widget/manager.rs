//! Widget manager tracking the single selection on the canvas.

use super::state::WidgetState;
use crate::shapes::ElementId;

/// Tracks which element is selected and whether it is editing text.
///
/// At most one element is selected, and only the selected element can be
/// editing.
#[derive(Debug, Clone, Default)]
pub struct WidgetManager {
    selected: Option<ElementId>,
    editing: bool,
}

impl WidgetManager {
    /// Create a new widget manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the state of an element.
    pub fn state(&self, id: ElementId) -> WidgetState {
        match self.selected {
            Some(selected) if selected == id && self.editing => WidgetState::Editing,
            Some(selected) if selected == id => WidgetState::Selected,
            _ => WidgetState::Normal,
        }
    }

    /// Currently selected element.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Element whose text is being edited.
    pub fn editing(&self) -> Option<ElementId> {
        self.selected.filter(|_| self.editing)
    }

    /// Check if an element is selected.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Check if a specific element is being edited.
    pub fn is_editing(&self, id: ElementId) -> bool {
        self.editing() == Some(id)
    }

    /// Select an element, leaving any previous edit.
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
        self.editing = false;
    }

    /// Select an element and enter text editing for it.
    pub fn enter_editing(&mut self, id: ElementId) {
        self.selected = Some(id);
        self.editing = true;
    }

    /// Clear the selection and any edit.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.editing = false;
    }

    /// Forget a removed element.
    pub fn remove(&mut self, id: ElementId) {
        if self.selected == Some(id) {
            self.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_select_and_clear() {
        let mut widgets = WidgetManager::new();
        let id = Uuid::new_v4();

        assert_eq!(widgets.state(id), WidgetState::Normal);
        widgets.select(id);
        assert_eq!(widgets.state(id), WidgetState::Selected);
        assert!(widgets.editing().is_none());

        widgets.clear_selection();
        assert!(widgets.selected().is_none());
    }

    #[test]
    fn test_editing_is_exclusive() {
        let mut widgets = WidgetManager::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        widgets.enter_editing(a);
        assert!(widgets.is_editing(a));
        widgets.enter_editing(b);
        assert!(!widgets.is_editing(a));
        assert!(widgets.is_editing(b));
        assert_eq!(widgets.state(b), WidgetState::Editing);
        assert!(widgets.state(b).is_selected());
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut widgets = WidgetManager::new();
        let a = Uuid::new_v4();
        widgets.select(a);
        widgets.remove(Uuid::new_v4());
        assert_eq!(widgets.selected(), Some(a));
        widgets.remove(a);
        assert!(widgets.selected().is_none());
    }
}
