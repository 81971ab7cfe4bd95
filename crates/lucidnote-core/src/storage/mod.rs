//! Note persistence contract and host-side notes facade.
//!
//! The canvas never touches storage; these types describe the note service
//! the host page talks to.

mod board;
mod memory;

pub use board::{Area, Notice, NoticeLevel, NotesBoard};
pub use memory::MemoryNoteStore;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use uuid::Uuid;

#[cfg(target_arch = "wasm32")]
use web_time::{SystemTime, UNIX_EPOCH};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for notes.
pub type NoteId = Uuid;

/// Unique identifier for users.
pub type UserId = Uuid;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Note not found: {0}")]
    NotFound(NoteId),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Unix milliseconds.
    pub created_at: u64,
    /// Unix milliseconds.
    pub updated_at: u64,
    pub user_id: UserId,
}

/// Fields for a new note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteInput {
    pub id: NoteId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl UpdateNoteInput {
    /// An update that changes nothing yet.
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            summary: None,
        }
    }
}

/// Current wall-clock time in unix milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Trait for note storage backends.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait NoteStore: Send + Sync {
    /// Notes owned by `owner`, most recently updated first.
    fn list(&self, owner: UserId) -> BoxFuture<'_, StorageResult<Vec<Note>>>;

    /// Load one note.
    fn get(&self, id: NoteId) -> BoxFuture<'_, StorageResult<Note>>;

    /// Insert a note owned by `owner`.
    fn create(&self, owner: UserId, input: CreateNoteInput) -> BoxFuture<'_, StorageResult<Note>>;

    /// Apply a partial update and bump `updated_at`.
    fn update(&self, input: UpdateNoteInput) -> BoxFuture<'_, StorageResult<Note>>;

    /// Delete a note. Deleting a missing note succeeds.
    fn delete(&self, id: NoteId) -> BoxFuture<'_, StorageResult<()>>;

    /// Store a generated summary on a note.
    fn save_summary(&self, id: NoteId, summary: String) -> BoxFuture<'_, StorageResult<Note>> {
        let mut input = UpdateNoteInput::new(id);
        input.summary = Some(summary);
        self.update(input)
    }
}

/// Trait for note storage backends (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait NoteStore {
    /// Notes owned by `owner`, most recently updated first.
    fn list(&self, owner: UserId) -> BoxFuture<'_, StorageResult<Vec<Note>>>;

    /// Load one note.
    fn get(&self, id: NoteId) -> BoxFuture<'_, StorageResult<Note>>;

    /// Insert a note owned by `owner`.
    fn create(&self, owner: UserId, input: CreateNoteInput) -> BoxFuture<'_, StorageResult<Note>>;

    /// Apply a partial update and bump `updated_at`.
    fn update(&self, input: UpdateNoteInput) -> BoxFuture<'_, StorageResult<Note>>;

    /// Delete a note. Deleting a missing note succeeds.
    fn delete(&self, id: NoteId) -> BoxFuture<'_, StorageResult<()>>;

    /// Store a generated summary on a note.
    fn save_summary(&self, id: NoteId, summary: String) -> BoxFuture<'_, StorageResult<Note>> {
        let mut input = UpdateNoteInput::new(id);
        input.summary = Some(summary);
        self.update(input)
    }
}

#[cfg(test)]
pub(crate) fn block_on<F: std::future::Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        match f.as_mut().poll(&mut cx) {
            Poll::Ready(result) => return result,
            Poll::Pending => {}
        }
    }
}
