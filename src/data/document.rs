//! The authoring state of one drag-and-drop question
//!
//! A [`Document`] owns the question prompt, the item registry and the zone
//! list. Item-to-zone assignment is stored on the item itself (`zone_id`),
//! so a zone can hold any number of items and an item sits in at most one
//! zone. Zone geometry is re-derived after every structural change.

use crate::core::errors::EditorResult;
use crate::core::settings::{
    GridSettings, EMPTY_ITEM_PLACEHOLDER, ZONE_LABEL_PREFIX,
};
use crate::data::ids::{IdAllocator, ItemId, ZoneId};
use crate::geometry::zone_layout::{layout_zones, ZoneRect};
use crate::{item_not_found, zone_not_found};
use serde::{Deserialize, Serialize};

/// A draggable text token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    /// `None` while the item waits in the unassigned pool
    pub zone_id: Option<ZoneId>,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            zone_id: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.zone_id.is_some()
    }

    /// Text to show for this item, with a placeholder for empty items
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            EMPTY_ITEM_PLACEHOLDER
        } else {
            &self.text
        }
    }
}

/// A labelled drop target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Zone {
    /// A zone with no geometry yet; the layout pass fills it in
    pub fn new(id: ZoneId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn rect(&self) -> ZoneRect {
        ZoneRect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_rect(&mut self, rect: ZoneRect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

/// Generated label for the zone at 0-based `index`
pub fn default_zone_label(index: usize) -> String {
    format!("{} {}", ZONE_LABEL_PREFIX, index + 1)
}

/// Question prompt, items and zones edited together
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) question: String,
    pub(crate) items: Vec<Item>,
    pub(crate) zones: Vec<Zone>,
    pub(crate) grid: GridSettings,
    pub(crate) ids: IdAllocator,
}

/// Documents are equal when their content is; layout settings and the id
/// serial do not take part.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.question == other.question
            && self.items == other.items
            && self.zones == other.zones
    }
}

impl Document {
    /// An empty document laid out on `grid`
    pub fn new(grid: GridSettings) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    /// No question, no items and no zones
    pub fn is_empty(&self) -> bool {
        self.question.is_empty() && self.items.is_empty() && self.zones.is_empty()
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|zone| &zone.id == id)
    }

    /// Items not placed in any zone
    pub fn unassigned_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.is_assigned())
    }

    /// Items currently placed in `zone_id`
    pub fn items_in_zone<'a>(
        &'a self,
        zone_id: &'a ZoneId,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.zone_id.as_ref() == Some(zone_id))
    }

    // Question ///////////////////////////////////////////////////////////////

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.question = question.into();
    }

    // Items //////////////////////////////////////////////////////////////////

    /// Append a new unassigned item and return its id
    pub fn add_item(&mut self, text: impl Into<String>) -> ItemId {
        let items = &self.items;
        let id = self
            .ids
            .next_item_id(|id| items.iter().any(|item| &item.id == id));
        log::debug!("Adding item {}", id);
        self.items.push(Item::new(id.clone(), text));
        id
    }

    /// Delete an item outright, wherever it was placed
    pub fn remove_item(&mut self, id: &ItemId) -> EditorResult<Item> {
        let index = self.item_index(id)?;
        log::debug!("Removing item {}", id);
        Ok(self.items.remove(index))
    }

    /// Change an item's text without touching its assignment
    pub fn rename_item(
        &mut self,
        id: &ItemId,
        text: impl Into<String>,
    ) -> EditorResult<()> {
        let index = self.item_index(id)?;
        self.items[index].text = text.into();
        Ok(())
    }

    // Zones //////////////////////////////////////////////////////////////////

    /// Append a zone labelled "Zone N" and reflow the grid
    pub fn add_zone(&mut self) -> ZoneId {
        let zones = &self.zones;
        let id = self
            .ids
            .next_zone_id(|id| zones.iter().any(|zone| &zone.id == id));
        let label = default_zone_label(self.zones.len());
        log::debug!("Adding zone {} ({})", id, label);
        self.zones.push(Zone::new(id.clone(), label));
        self.relayout();
        id
    }

    /// Delete a zone, send its items back to the pool and reflow the grid
    pub fn remove_zone(&mut self, id: &ZoneId) -> EditorResult<Zone> {
        let index = self.zone_index(id)?;
        let zone = self.zones.remove(index);

        let mut released = 0;
        for item in &mut self.items {
            if item.zone_id.as_ref() == Some(id) {
                item.zone_id = None;
                released += 1;
            }
        }
        log::debug!(
            "Removed zone {}, returned {} item(s) to the pool",
            id,
            released
        );

        self.relayout();
        Ok(zone)
    }

    /// Change a zone's label; geometry is unaffected
    pub fn relabel_zone(
        &mut self,
        id: &ZoneId,
        label: impl Into<String>,
    ) -> EditorResult<()> {
        let index = self.zone_index(id)?;
        self.zones[index].label = label.into();
        Ok(())
    }

    /// Move a zone to `index` (clamped to the end) and reflow the grid
    pub fn move_zone(&mut self, id: &ZoneId, index: usize) -> EditorResult<()> {
        let from = self.zone_index(id)?;
        let zone = self.zones.remove(from);
        let to = index.min(self.zones.len());
        self.zones.insert(to, zone);
        log::debug!("Moved zone {} from {} to {}", id, from, to);
        self.relayout();
        Ok(())
    }

    // Assignment /////////////////////////////////////////////////////////////

    /// Place an item in a zone, replacing any previous placement
    pub fn assign_item(
        &mut self,
        zone_id: &ZoneId,
        item_id: &ItemId,
    ) -> EditorResult<()> {
        self.zone_index(zone_id)?;
        let index = self.item_index(item_id)?;
        let item = &mut self.items[index];
        if let Some(previous) = item.zone_id.as_ref() {
            if previous != zone_id {
                log::debug!(
                    "Item {} moves from zone {} to {}",
                    item_id,
                    previous,
                    zone_id
                );
            }
        }
        item.zone_id = Some(zone_id.clone());
        Ok(())
    }

    /// Return an item to the unassigned pool
    pub fn unassign_item(&mut self, item_id: &ItemId) -> EditorResult<()> {
        let index = self.item_index(item_id)?;
        self.items[index].zone_id = None;
        Ok(())
    }

    /// Recompute every zone rectangle from the current zone order
    pub fn relayout(&mut self) {
        layout_zones(&mut self.zones, &self.grid);
    }

    fn item_index(&self, id: &ItemId) -> EditorResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| item_not_found!(id, self.items.len()))
    }

    fn zone_index(&self, id: &ZoneId) -> EditorResult<usize> {
        self.zones
            .iter()
            .position(|zone| &zone.id == id)
            .ok_or_else(|| zone_not_found!(id, self.zones.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::zone_layout::any_overlap;

    #[test]
    fn new_items_start_unassigned() {
        let mut doc = Document::default();
        let a = doc.add_item("A");
        let b = doc.add_item("");
        assert_ne!(a, b);
        assert_eq!(doc.unassigned_items().count(), 2);
        assert_eq!(doc.item(&b).map(Item::display_text), Some("(empty item)"));
        assert!(doc.zones().is_empty());
    }

    #[test]
    fn zone_labels_count_up() {
        let mut doc = Document::default();
        doc.add_zone();
        let second = doc.add_zone();
        assert_eq!(doc.zone(&second).map(|z| z.label.as_str()), Some("Zone 2"));
    }

    #[test]
    fn removing_a_zone_releases_its_items() {
        let mut doc = Document::default();
        let a = doc.add_item("A");
        let b = doc.add_item("B");
        let zone = doc.add_zone();
        let other = doc.add_zone();
        doc.assign_item(&zone, &a).expect("Assign A");
        doc.assign_item(&other, &b).expect("Assign B");

        doc.remove_zone(&zone).expect("Remove zone");

        assert!(doc.items().iter().all(|i| i.zone_id.as_ref() != Some(&zone)));
        assert_eq!(doc.item(&a).and_then(|i| i.zone_id.clone()), None);
        assert_eq!(doc.item(&b).and_then(|i| i.zone_id.clone()), Some(other));
    }

    #[test]
    fn removed_zone_leaves_no_gap() {
        let mut doc = Document::default();
        let first = doc.add_zone();
        let second = doc.add_zone();
        let third = doc.add_zone();
        doc.remove_zone(&first).expect("Remove zone");

        let grid = *doc.grid();
        assert_eq!(doc.zone(&second).map(Zone::rect), Some(grid.rect_for(0)));
        assert_eq!(doc.zone(&third).map(Zone::rect), Some(grid.rect_for(1)));
        assert!(!any_overlap(doc.zones()));
    }

    #[test]
    fn emptied_zone_is_kept() {
        let mut doc = Document::default();
        let item = doc.add_item("A");
        let zone = doc.add_zone();
        doc.assign_item(&zone, &item).expect("Assign");
        doc.remove_item(&item).expect("Remove item");
        assert_eq!(doc.zones().len(), 1);
        assert_eq!(doc.items_in_zone(&zone).count(), 0);
    }

    #[test]
    fn rename_keeps_assignment() {
        let mut doc = Document::default();
        let item = doc.add_item("A");
        let zone = doc.add_zone();
        doc.assign_item(&zone, &item).expect("Assign");
        doc.rename_item(&item, "Apple").expect("Rename");
        let renamed = doc.item(&item).expect("Item exists");
        assert_eq!(renamed.text, "Apple");
        assert_eq!(renamed.zone_id.as_ref(), Some(&zone));
    }

    #[test]
    fn relabel_keeps_geometry() {
        let mut doc = Document::default();
        let zone = doc.add_zone();
        let before = doc.zone(&zone).map(Zone::rect);
        doc.relabel_zone(&zone, "Fruits").expect("Relabel");
        let after = doc.zone(&zone).expect("Zone exists");
        assert_eq!(after.label, "Fruits");
        assert_eq!(Some(after.rect()), before);
    }

    #[test]
    fn unassigned_item_can_go_to_any_zone() {
        let mut doc = Document::default();
        let item = doc.add_item("A");
        let first = doc.add_zone();
        let second = doc.add_zone();
        doc.assign_item(&first, &item).expect("Assign");
        doc.unassign_item(&item).expect("Unassign");
        assert_eq!(doc.unassigned_items().count(), 1);
        doc.assign_item(&second, &item).expect("Reassign");
        assert_eq!(doc.items_in_zone(&second).count(), 1);
    }

    #[test]
    fn move_zone_reflows_grid() {
        let mut doc = Document::default();
        let first = doc.add_zone();
        let second = doc.add_zone();
        doc.move_zone(&first, 10).expect("Move");
        assert_eq!(doc.zones()[0].id, second);
        assert_eq!(doc.zones()[1].id, first);
        assert_eq!(doc.zones()[0].rect(), doc.grid().rect_for(0));
        // Labels are not renumbered
        assert_eq!(doc.zones()[1].label, "Zone 1");
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut doc = Document::default();
        let item = doc.add_item("A");
        let missing_zone = ZoneId::new("nope");
        assert!(doc.assign_item(&missing_zone, &item).is_err());
        assert!(doc.remove_zone(&missing_zone).is_err());
        assert!(doc.remove_item(&ItemId::new("nope")).is_err());
        assert_eq!(doc.item(&item).and_then(|i| i.zone_id.clone()), None);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        let mut doc = Document::default();
        let first = doc.add_item("A");
        doc.remove_item(&first).expect("Remove");
        let second = doc.add_item("B");
        assert_ne!(first, second);
    }
}
