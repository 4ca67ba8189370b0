//! Authoring core for drag-and-drop spatial questions.
//!
//! A question document holds a prompt, draggable text items and labelled
//! drop zones laid out on a fixed grid. Documents travel as JSON strings;
//! [`EditorSession`] keeps one document in sync with a host that owns the
//! string.

pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod logger;


pub use crate::core::settings::{EditorSettings, GridSettings};
pub use data::{parse_document, serialize_document, Document, Item, Zone};
pub use data::{ItemId, ZoneId};
pub use editing::{EditCommand, EditorSession};
