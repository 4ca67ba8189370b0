//! Zone geometry and grid layout

pub mod zone_layout;

// Re-export commonly used items
pub use zone_layout::{layout_zones, GridCell, ZoneRect};
