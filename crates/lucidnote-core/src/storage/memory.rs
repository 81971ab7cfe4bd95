//! In-memory note store.

use super::{
    BoxFuture, CreateNoteInput, Note, NoteId, NoteStore, StorageError, StorageResult,
    UpdateNoteInput, UserId, now_millis,
};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    notes: HashMap<NoteId, Note>,
    /// Last timestamp handed out; keeps `updated_at` strictly increasing.
    last_stamp: u64,
}

impl Inner {
    fn stamp(&mut self) -> u64 {
        self.last_stamp = now_millis().max(self.last_stamp + 1);
        self.last_stamp
    }
}

/// In-memory note storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryNoteStore {
    inner: RwLock<Inner>,
}

impl MemoryNoteStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl NoteStore for MemoryNoteStore {
    fn list(&self, owner: UserId) -> BoxFuture<'_, StorageResult<Vec<Note>>> {
        Box::pin(async move {
            let inner = self.inner.read().map_err(lock_error)?;
            let mut notes: Vec<Note> = inner
                .notes
                .values()
                .filter(|n| n.user_id == owner)
                .cloned()
                .collect();
            notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            Ok(notes)
        })
    }

    fn get(&self, id: NoteId) -> BoxFuture<'_, StorageResult<Note>> {
        Box::pin(async move {
            let inner = self.inner.read().map_err(lock_error)?;
            inner.notes.get(&id).cloned().ok_or(StorageError::NotFound(id))
        })
    }

    fn create(&self, owner: UserId, input: CreateNoteInput) -> BoxFuture<'_, StorageResult<Note>> {
        Box::pin(async move {
            let mut inner = self.inner.write().map_err(lock_error)?;
            let now = inner.stamp();
            let note = Note {
                id: Uuid::new_v4(),
                title: input.title,
                content: input.content,
                summary: input.summary,
                created_at: now,
                updated_at: now,
                user_id: owner,
            };
            inner.notes.insert(note.id, note.clone());
            Ok(note)
        })
    }

    fn update(&self, input: UpdateNoteInput) -> BoxFuture<'_, StorageResult<Note>> {
        Box::pin(async move {
            let mut inner = self.inner.write().map_err(lock_error)?;
            let now = inner.stamp();
            let note = inner
                .notes
                .get_mut(&input.id)
                .ok_or(StorageError::NotFound(input.id))?;
            if let Some(title) = input.title {
                note.title = title;
            }
            if let Some(content) = input.content {
                note.content = content;
            }
            if let Some(summary) = input.summary {
                note.summary = Some(summary);
            }
            note.updated_at = now;
            Ok(note.clone())
        })
    }

    fn delete(&self, id: NoteId) -> BoxFuture<'_, StorageResult<()>> {
        Box::pin(async move {
            let mut inner = self.inner.write().map_err(lock_error)?;
            inner.notes.remove(&id);
            Ok(())
        })
    }
}
