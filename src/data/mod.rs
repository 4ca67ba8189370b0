//! Question document data
//!
//! This module handles the authoring state of a drag-and-drop question:
//! - Item and zone identifiers
//! - The document model and its edit operations
//! - JSON serialization of documents

pub mod document;
pub mod ids;
pub mod serialization;

pub use document::{Document, Item, Zone};
pub use ids::{ItemId, ZoneId};
pub use serialization::{parse_document, serialize_document};
