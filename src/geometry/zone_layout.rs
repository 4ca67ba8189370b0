//! Zone grid layout
//!
//! Zones sit in a fixed grid, filled left-to-right and top-to-bottom in
//! document order:
//!
//! ```text
//! zone 0   zone 1
//! zone 2   zone 3
//! zone 4   ...
//! ```
//!
//! Geometry is derived purely from a zone's index, so laying out the same
//! ordered list twice always gives the same rectangles.

use crate::core::settings::GridSettings;
use crate::data::document::Zone;
use crate::data::ids::ZoneId;
use kurbo::Rect;
use std::collections::HashSet;

/// Row and column of a zone in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// A zone rectangle in container percentages
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneRect {
    pub fn to_kurbo(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// True when the two rectangles share any area; touching edges do not count
    pub fn overlaps(&self, other: &ZoneRect) -> bool {
        let shared = self.to_kurbo().intersect(other.to_kurbo());
        shared.width() > 0.0 && shared.height() > 0.0
    }
}

impl GridSettings {
    /// Grid cell of the zone at `index`
    pub fn cell(&self, index: usize) -> GridCell {
        let columns = self.columns.max(1);
        GridCell {
            row: index / columns,
            column: index % columns,
        }
    }

    /// Rectangle of the zone at `index`
    pub fn rect_for(&self, index: usize) -> ZoneRect {
        let cell = self.cell(index);
        ZoneRect {
            x: round2(
                self.start_x + cell.column as f64 * (self.width + self.spacing),
            ),
            y: round2(
                self.start_y + cell.row as f64 * (self.height + self.spacing),
            ),
            width: round2(self.width),
            height: round2(self.height),
        }
    }
}

/// Round to two decimals so repeated layouts never drift
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Overwrite the geometry of every zone from its position in the slice
///
/// Ids and labels are left alone.
pub fn layout_zones(zones: &mut [Zone], grid: &GridSettings) {
    for (index, zone) in zones.iter_mut().enumerate() {
        zone.set_rect(grid.rect_for(index));
    }
}

/// Drop every zone whose id was already seen, keeping the first
pub fn dedup_zones(zones: Vec<Zone>) -> Vec<Zone> {
    let mut seen: HashSet<ZoneId> = HashSet::with_capacity(zones.len());
    let before = zones.len();
    let unique: Vec<Zone> = zones
        .into_iter()
        .filter(|zone| seen.insert(zone.id.clone()))
        .collect();

    if unique.len() != before {
        log::warn!(
            "Dropped {} zone(s) with duplicate ids",
            before - unique.len()
        );
    }
    unique
}

/// True when any two zones in the slice overlap
pub fn any_overlap(zones: &[Zone]) -> bool {
    zones.iter().enumerate().any(|(i, a)| {
        zones[i + 1..]
            .iter()
            .any(|b| a.rect().overlaps(&b.rect()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones(count: usize) -> Vec<Zone> {
        (0..count)
            .map(|i| Zone::new(ZoneId::new(format!("zone-{i}")), "Zone"))
            .collect()
    }

    #[test]
    fn first_zone_sits_at_grid_origin() {
        let grid = GridSettings::default();
        let rect = grid.rect_for(0);
        assert_eq!(rect.x, grid.start_x);
        assert_eq!(rect.y, grid.start_y);
        assert_eq!(rect.width, grid.width);
        assert_eq!(rect.height, grid.height);
    }

    #[test]
    fn zones_fill_rows_left_to_right() {
        let grid = GridSettings::default();
        assert_eq!(grid.cell(0), GridCell { row: 0, column: 0 });
        assert_eq!(grid.cell(1), GridCell { row: 0, column: 1 });
        assert_eq!(grid.cell(2), GridCell { row: 1, column: 0 });
        assert_eq!(grid.cell(5), GridCell { row: 2, column: 1 });

        let second = grid.rect_for(1);
        assert_eq!(second.x, 52.5);
        assert_eq!(second.y, 5.0);
        let third = grid.rect_for(2);
        assert_eq!(third.x, 5.0);
        assert_eq!(third.y, 35.0);
    }

    #[test]
    fn layout_is_idempotent() {
        let grid = GridSettings {
            start_x: 1.1,
            start_y: 2.2,
            width: 33.333,
            height: 10.01,
            spacing: 0.7,
            columns: 2,
        };
        let mut once = zones(7);
        layout_zones(&mut once, &grid);
        let mut twice = once.clone();
        layout_zones(&mut twice, &grid);
        assert_eq!(once, twice);
    }

    #[test]
    fn coordinates_are_rounded_to_two_decimals() {
        let grid = GridSettings {
            width: 33.3333,
            ..GridSettings::default()
        };
        let rect = grid.rect_for(1);
        assert_eq!(rect.width, 33.33);
        assert_eq!(rect.x, 43.33);
    }

    #[test]
    fn zones_never_overlap() {
        let grid = GridSettings::default();
        for count in 0..=12 {
            let mut zones = zones(count);
            layout_zones(&mut zones, &grid);
            assert!(!any_overlap(&zones), "Overlap with {count} zones");
        }
    }

    #[test]
    fn layout_keeps_ids_and_labels() {
        let mut zones = vec![
            Zone::new(ZoneId::new("b"), "Second"),
            Zone::new(ZoneId::new("a"), "First"),
        ];
        layout_zones(&mut zones, &GridSettings::default());
        assert_eq!(zones[0].id.as_str(), "b");
        assert_eq!(zones[0].label, "Second");
        assert_eq!(zones[1].label, "First");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let zones = vec![
            Zone::new(ZoneId::new("a"), "First"),
            Zone::new(ZoneId::new("b"), "Other"),
            Zone::new(ZoneId::new("a"), "Copy"),
        ];
        let unique = dedup_zones(zones);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].label, "First");
        assert_eq!(unique[1].id.as_str(), "b");
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = ZoneRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let b = ZoneRect { x: 10.0, ..a };
        let c = ZoneRect { x: 5.0, ..a };
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }
}
