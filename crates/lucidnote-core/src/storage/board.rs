//! Host-side notes facade.
//!
//! Wraps a [`NoteStore`] and a [`SessionProvider`], keeps the list the
//! dashboard shows, and turns every failure into a [`Notice`] instead of an
//! error. Local state only changes after the backend call succeeds.

use super::{CreateNoteInput, Note, NoteId, NoteStore, UpdateNoteInput};
use crate::session::{SessionProvider, User, require_user};
use crate::summarize::{CARD_MAX_LENGTH, Summarizer};
use serde::{Deserialize, Serialize};

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the toast queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Areas that require a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Canvas,
    Dashboard,
}

impl Area {
    fn login_message(self) -> &'static str {
        match self {
            Area::Canvas => "Please login to access the canvas",
            Area::Dashboard => "Please login to access the dashboard",
        }
    }
}

/// Notes list plus toast queue over a store and a session.
pub struct NotesBoard<S, P> {
    store: S,
    session: P,
    notes: Vec<Note>,
    notices: Vec<Notice>,
}

impl<S: NoteStore, P: SessionProvider> NotesBoard<S, P> {
    pub fn new(store: S, session: P) -> Self {
        Self {
            store,
            session,
            notes: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session(&self) -> &P {
        &self.session
    }

    /// Notes currently shown, most recently updated first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove and return pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn fail(&mut self, message: &str, error: impl std::fmt::Display) {
        log::warn!("{}: {}", message, error);
        self.notices.push(Notice::error(message));
    }

    /// Resolve the signed-in user for a gated area.
    pub async fn enter(&mut self, area: Area) -> Option<User> {
        match require_user(&self.session).await {
            Ok(user) => Some(user),
            Err(e) => {
                self.fail(area.login_message(), e);
                None
            }
        }
    }

    /// Reload the signed-in user's notes. Returns false on failure.
    pub async fn load_notes(&mut self) -> bool {
        let user = match require_user(&self.session).await {
            Ok(user) => user,
            Err(e) => {
                self.fail("Failed to load notes", e);
                return false;
            }
        };
        match self.store.list(user.id).await {
            Ok(notes) => {
                self.notes = notes;
                true
            }
            Err(e) => {
                self.fail("Failed to load notes", e);
                false
            }
        }
    }

    /// Load a single note.
    pub async fn load_note(&mut self, id: NoteId) -> Option<Note> {
        match self.store.get(id).await {
            Ok(note) => Some(note),
            Err(e) => {
                self.fail("Failed to load note", e);
                None
            }
        }
    }

    /// Create a note owned by the signed-in user.
    pub async fn create_note(&mut self, input: CreateNoteInput) -> Option<Note> {
        let user = match require_user(&self.session).await {
            Ok(user) => user,
            Err(e) => {
                self.fail("You must be logged in to create notes", e);
                return None;
            }
        };
        match self.store.create(user.id, input).await {
            Ok(note) => {
                self.notes.insert(0, note.clone());
                self.notices.push(Notice::success("Note created successfully"));
                Some(note)
            }
            Err(e) => {
                self.fail("Failed to create note", e);
                None
            }
        }
    }

    /// Apply a partial update.
    pub async fn update_note(&mut self, input: UpdateNoteInput) -> Option<Note> {
        match self.store.update(input).await {
            Ok(note) => {
                self.promote(note.clone());
                self.notices.push(Notice::success("Note updated successfully"));
                Some(note)
            }
            Err(e) => {
                self.fail("Failed to update note", e);
                None
            }
        }
    }

    /// Delete a note. Returns whether the backend accepted it.
    pub async fn delete_note(&mut self, id: NoteId) -> bool {
        match self.store.delete(id).await {
            Ok(()) => {
                self.notes.retain(|n| n.id != id);
                self.notices.push(Notice::success("Note deleted successfully"));
                true
            }
            Err(e) => {
                self.fail("Failed to delete note", e);
                false
            }
        }
    }

    /// Persist a summary on a note.
    pub async fn save_summary(&mut self, id: NoteId, summary: impl Into<String>) -> bool {
        match self.store.save_summary(id, summary.into()).await {
            Ok(note) => {
                self.promote(note);
                self.notices.push(Notice::success("Summary saved"));
                true
            }
            Err(e) => {
                self.fail("Failed to save summary", e);
                false
            }
        }
    }

    /// Generate a card-length summary for a shown note without storing it.
    pub async fn summarize_note<Z: Summarizer + ?Sized>(
        &mut self,
        summarizer: &Z,
        id: NoteId,
    ) -> Option<String> {
        let content = self.notes.iter().find(|n| n.id == id)?.content.clone();
        if content.trim().is_empty() {
            return Some(crate::summarize::EMPTY_TEXT_MESSAGE.to_string());
        }
        match summarizer.summarize(&content, CARD_MAX_LENGTH).await {
            Ok(summary) if !summary.trim().is_empty() => Some(summary),
            Ok(_) => {
                self.fail("Failed to generate summary", "empty summary");
                None
            }
            Err(e) => {
                self.fail("Failed to generate summary", e);
                None
            }
        }
    }

    /// Replace a note in the shown list and move it to the front.
    fn promote(&mut self, note: Note) {
        self.notes.retain(|n| n.id != note.id);
        self.notes.insert(0, note);
    }
}
