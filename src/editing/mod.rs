pub mod commands;
pub mod edit_type;
pub mod session;
pub mod undo;

// Re-export important types
pub use commands::EditCommand;
pub use session::EditorSession;
pub use undo::UndoState;
