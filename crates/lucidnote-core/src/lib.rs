//! LucidNote Core Library
//!
//! Platform-agnostic canvas model, interaction state machine and host
//! contracts for the LucidNote ideation canvas.

pub mod canvas;
pub mod config;
pub mod event_handler;
pub mod input;
pub mod session;
pub mod shapes;
pub mod storage;
pub mod summarize;
pub mod tools;
pub mod widget;

pub use canvas::{Canvas, CanvasDocument, INITIAL_LAYER};
pub use config::{CanvasConfig, ConfigError};
pub use event_handler::CanvasChange;
pub use input::{CanvasCommand, KeyEvent, PointerEvent};
pub use session::{AuthError, MemorySessionProvider, OAuthProvider, SessionProvider, User};
pub use shapes::{Element, ElementId, ElementKind, Layer, PaletteColor, SerializableColor, Stroke};
pub use storage::{MemoryNoteStore, Note, NoteStore, NotesBoard, Notice, StorageError};
pub use summarize::{LeadSummarizer, SummarizeError, Summarizer, summarize_text};
pub use tools::{ToolKind, ToolManager, ToolState};
pub use widget::{WidgetManager, WidgetState};
