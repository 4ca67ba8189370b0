// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the settings for the editor.

use crate::core::errors::{EditorContext, EditorResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Zone Grid //////////////////////////////////////////////////////////////////
// All values are percentages of the question container.

/// Left edge of the first grid column
pub const GRID_START_X: f64 = 5.0;
/// Top edge of the first grid row
pub const GRID_START_Y: f64 = 5.0;
/// Width of every zone
pub const ZONE_WIDTH: f64 = 42.5;
/// Height of every zone
pub const ZONE_HEIGHT: f64 = 25.0;
/// Gap between neighbouring zones, both horizontally and vertically
pub const ZONE_SPACING: f64 = 5.0;
/// Zones per grid row
pub const GRID_COLUMNS: usize = 2;

// Undo ///////////////////////////////////////////////////////////////////////

/// Number of document snapshots kept for undo
pub const UNDO_STACK_SIZE: usize = 128;

// Labels /////////////////////////////////////////////////////////////////////

/// Prefix of generated zone labels ("Zone 1", "Zone 2", ...)
pub const ZONE_LABEL_PREFIX: &str = "Zone";
/// Shown in place of an item whose text is empty
pub const EMPTY_ITEM_PLACEHOLDER: &str = "(empty item)";

/// Geometry of the fixed zone grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridSettings {
    pub start_x: f64,
    pub start_y: f64,
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
    pub columns: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            start_x: GRID_START_X,
            start_y: GRID_START_Y,
            width: ZONE_WIDTH,
            height: ZONE_HEIGHT,
            spacing: ZONE_SPACING,
            columns: GRID_COLUMNS,
        }
    }
}

/// Everything an editor session can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    pub grid: GridSettings,
    pub undo_limit: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            undo_limit: UNDO_STACK_SIZE,
        }
    }
}

impl EditorSettings {
    /// Load settings overrides from a JSON file; absent fields keep defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> EditorResult<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_file_context("read", path)?;
        let settings: EditorSettings = serde_json::from_str(&contents)
            .with_file_context("parse", path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the grid cannot be laid out with
    pub fn validate(&self) -> EditorResult<()> {
        let grid = &self.grid;
        anyhow::ensure!(grid.columns > 0, "Grid needs at least one column");
        for (name, value) in [
            ("startX", grid.start_x),
            ("startY", grid.start_y),
            ("width", grid.width),
            ("height", grid.height),
            ("spacing", grid.spacing),
        ] {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "Grid {} must be a finite, non-negative number, got: {}",
                name,
                value
            );
        }
        anyhow::ensure!(
            grid.width > 0.0 && grid.height > 0.0,
            "Zones need a positive width and height"
        );
        anyhow::ensure!(self.undo_limit > 0, "Undo limit must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_fits_two_columns_in_container() {
        let grid = GridSettings::default();
        let right_edge = grid.start_x
            + grid.columns as f64 * grid.width
            + (grid.columns - 1) as f64 * grid.spacing;
        assert!(right_edge <= 100.0, "Grid overflows container");
        assert_eq!(grid.columns, 2);
    }

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{ "grid": { "width": 30.0 } }"#)
                .expect("Failed to parse settings");
        assert_eq!(settings.grid.width, 30.0);
        assert_eq!(settings.grid.height, ZONE_HEIGHT);
        assert_eq!(settings.undo_limit, UNDO_STACK_SIZE);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn zero_columns_are_rejected() {
        let mut settings = EditorSettings::default();
        settings.grid.columns = 0;
        assert!(settings.validate().is_err());
    }
}
