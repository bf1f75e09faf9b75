//! # stylemap - hard-coded CSS value mapping
//!
//! Finds literal colors, backgrounds, borders and shadows in CSS source and
//! maps each one onto a variable from a fixed design-system catalog.
//!
//! The engine is a flat pipeline of pure functions:
//!
//! - **Scan**: [`scanner::scan`] finds `property: value;` declarations of
//!   interest and records their enclosing selector
//! - **Classify**: [`role::classify`] decides what kind of element a selector
//!   targets, [`state::InteractiveState`] which pseudo-states it covers
//! - **Resolve**: [`resolver::resolve`] picks the best fitting
//!   [`SystemVariable`]
//! - **Plan**: [`planner::plan`] turns suggestions into a batch of
//!   non-overlapping [`EditInstruction`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use stylemap::buffer::TextBuffer;
//! use stylemap::surface::TextSurface;
//! use stylemap::{plan, resolve, scan};
//!
//! let mut doc = TextBuffer::new(".card { background: #fafafa; }");
//! let matches = scan(doc.text());
//! let edits = plan(&matches, resolve, |literal, n| {
//!     doc.find_occurrences(literal).get(n).copied()
//! });
//! doc.apply_edits(&edits).unwrap();
//! assert_eq!(doc.text(), ".card { background: var(--card-bg); }");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the variable catalog and its categories
//! - [`role`], [`state`], [`hash`]: selector classification and tie-breaking
//! - [`scanner`], [`resolver`], [`planner`]: the pipeline stages
//! - [`surface`], [`buffer`]: the text surface boundary and an in-memory
//!   implementation
//! - [`error`]: edit application errors

pub mod buffer;
pub mod catalog;
pub mod error;
pub mod hash;
pub mod planner;
pub mod resolver;
pub mod role;
pub mod scanner;
pub mod state;
pub mod surface;

pub use catalog::{Category, SystemVariable};
pub use error::EditError;
pub use planner::{EditInstruction, plan};
pub use resolver::resolve;
pub use role::{Role, classify};
pub use scanner::{Match, scan};
pub use state::InteractiveState;
pub use surface::{Position, TextRange, TextSurface};
