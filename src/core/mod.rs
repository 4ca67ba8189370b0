//! Core editor functionality
//!
//! This module contains the pieces everything else builds on:
//! - Error handling
//! - Settings and CLI handling

pub mod cli;
pub mod errors;
pub mod settings;

// Re-export commonly used items
pub use cli::CliArgs;
pub use errors::{EditorContext, EditorResult};
pub use settings::{EditorSettings, GridSettings};
