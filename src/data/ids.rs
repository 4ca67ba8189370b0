//! Stable identifiers for items and zones
//!
//! Ids are opaque strings. Documents written by other tools may carry
//! numeric ids (timestamps); those are kept as their decimal text.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Identifier of a draggable item
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub SmolStr);

/// Identifier of a drop zone
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ZoneId(pub SmolStr);

impl ItemId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ZoneId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Hands out fresh ids of the form `item-N` / `zone-N`
///
/// The serial only ever grows, so an id removed from a document is never
/// handed out again by the same allocator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdAllocator {
    next_serial: u64,
}

impl IdAllocator {
    /// Next item id that `taken` does not already contain
    pub fn next_item_id(&mut self, taken: impl Fn(&ItemId) -> bool) -> ItemId {
        loop {
            let id = ItemId::new(format!("item-{}", self.bump()));
            if !taken(&id) {
                return id;
            }
        }
    }

    /// Next zone id that `taken` does not already contain
    pub fn next_zone_id(&mut self, taken: impl Fn(&ZoneId) -> bool) -> ZoneId {
        loop {
            let id = ZoneId::new(format!("zone-{}", self.bump()));
            if !taken(&id) {
                return id;
            }
        }
    }

    /// Move the serial past a loaded `item-N` / `zone-N` id
    ///
    /// Ids in any other form cannot collide with generated ones.
    pub fn reserve(&mut self, id: &str) {
        let serial = id
            .strip_prefix("item-")
            .or_else(|| id.strip_prefix("zone-"))
            .and_then(|n| n.parse::<u64>().ok())
            .filter(|serial| *serial < u64::MAX / 2);
        if let Some(serial) = serial {
            self.next_serial = self.next_serial.max(serial);
        }
    }

    fn bump(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }
}
