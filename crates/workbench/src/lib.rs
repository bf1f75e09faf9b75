//! # workbench - interactive session around the stylemap engine
//!
//! Hosts the pieces of the refactoring tool that sit between the engine and
//! a user:
//!
//! - [`session`]: owns a [`TextSurface`](stylemap::TextSurface), keeps the
//!   current findings and runs selection, auto-refactor and injection
//! - [`context`]: the manual suggestion panel for a selection
//! - [`theme`], [`sidebar`]: the two persisted layout preferences
//! - [`prefs`]: key-value preference stores (memory and JSON file)
//! - [`log_init`]: file logger for the `log` facade
//!
//! ## Example
//!
//! ```rust
//! use stylemap::buffer::TextBuffer;
//! use workbench::Session;
//!
//! let mut session = Session::new(TextBuffer::default());
//! session.load_source("h1 { color: #111; }");
//! assert_eq!(session.identified(), 1);
//!
//! let outcome = session.auto_refactor().unwrap();
//! assert_eq!(outcome.applied, 1);
//! assert_eq!(session.text(), "h1 { color: var(--text-primary); }");
//! ```

pub mod context;
pub mod error;
pub mod log_init;
pub mod prefs;
pub mod session;
pub mod sidebar;
pub mod theme;

pub use context::{ContextKind, SelectionContext};
pub use error::{Result, WorkbenchError};
pub use prefs::{FileStore, MemoryStore, PreferenceStore};
pub use session::{Finding, RefactorOutcome, Session};
pub use sidebar::{GutterSide, SidebarDrag, SidebarWidth};
pub use theme::Theme;
