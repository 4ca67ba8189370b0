//! Document <-> JSON string
//!
//! The JSON string is the editor's only external contract. Incoming text is
//! first checked against a loose intermediate schema ([`RawDocument`]) in
//! which every field is optional; anything that does not fit is rejected as
//! a whole and the editor starts from an empty document instead. Accepted
//! input is then repaired into a [`Document`]: missing ids are filled in,
//! duplicate zones collapse, dangling zone references are cleared and the
//! zone geometry is recomputed.
//!
//! Stored geometry is never read back. It is written so a saved document
//! describes itself, but the grid settings of the loading editor always win.

use crate::core::errors::{bail, EditorResult};
use crate::core::settings::GridSettings;
use crate::data::document::{default_zone_label, Document, Item, Zone};
use crate::data::ids::{ItemId, ZoneId};
use crate::geometry::zone_layout::dedup_zones;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// An id as it may appear in stored JSON: text or a bare number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    question: Option<String>,
    items: Option<Vec<RawItem>>,
    zones: Option<Vec<RawZone>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawItem {
    id: Option<RawId>,
    text: Option<String>,
    zone_id: Option<RawId>,
}

/// Geometry fields are accepted but ignored
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawZone {
    id: Option<RawId>,
    label: Option<String>,
}

/// Wire form written by [`serialize_document`]; field order is the key order
#[derive(Serialize)]
struct DocumentOut<'a> {
    question: &'a str,
    items: &'a [Item],
    zones: &'a [Zone],
}

/// Build a document from the editor's `value`
///
/// Never fails: empty input gives an empty document and input that is not a
/// JSON object of the expected shape is logged and treated as empty.
pub fn parse_document(value: &str, grid: &GridSettings) -> Document {
    if value.trim().is_empty() {
        return Document::new(*grid);
    }

    match read_raw_document(value) {
        Ok(raw) => build_document(raw, grid),
        Err(err) => {
            log::warn!("Ignoring malformed question document: {}", err);
            Document::new(*grid)
        }
    }
}

/// Only a JSON object is a document; derived struct visitors would also
/// take an array as a list of fields.
fn read_raw_document(value: &str) -> EditorResult<RawDocument> {
    match serde_json::from_str::<Value>(value)? {
        Value::Object(fields) => {
            Ok(serde_json::from_value(Value::Object(fields))?)
        }
        other => bail!("Expected a JSON object, got: {}", json_kind(&other)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn build_document(raw: RawDocument, grid: &GridSettings) -> Document {
    let mut doc = Document::new(*grid);
    doc.question = raw.question.unwrap_or_default();

    let raw_zones: Vec<(Option<String>, Option<String>)> = raw
        .zones
        .unwrap_or_default()
        .into_iter()
        .map(|zone| (zone.id.map(RawId::into_string), zone.label))
        .collect();
    let raw_items: Vec<(Option<String>, RawItem)> = raw
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|mut item| (item.id.take().map(RawId::into_string), item))
        .collect();

    // Every stored id stays reserved, even the ones of dropped duplicates
    let stored_zone_ids: HashSet<String> = raw_zones
        .iter()
        .filter_map(|(id, _)| id.clone())
        .collect();
    let stored_item_ids: HashSet<String> = raw_items
        .iter()
        .filter_map(|(id, _)| id.clone())
        .collect();
    for id in stored_zone_ids.iter().chain(&stored_item_ids) {
        doc.ids.reserve(id);
    }

    // Zones first so item references can be checked against them
    let mut zones = Vec::new();
    let mut unlabelled: HashSet<ZoneId> = HashSet::new();
    for (stored_id, label) in raw_zones {
        let id = match stored_id {
            Some(id) if !id.is_empty() => ZoneId::new(id),
            _ => doc
                .ids
                .next_zone_id(|id| stored_zone_ids.contains(id.as_str())),
        };
        let first_with_id = !zones.iter().any(|zone: &Zone| zone.id == id);
        if label.is_none() && first_with_id {
            unlabelled.insert(id.clone());
        }
        zones.push(Zone::new(id, label.unwrap_or_default()));
    }
    doc.zones = dedup_zones(zones);
    for (index, zone) in doc.zones.iter_mut().enumerate() {
        if unlabelled.contains(&zone.id) {
            zone.label = default_zone_label(index);
        }
    }
    doc.relayout();

    let zone_ids: HashSet<&ZoneId> = doc.zones.iter().map(|z| &z.id).collect();
    let mut items: Vec<Item> = Vec::new();
    let mut orphans = 0;
    for (stored_id, raw_item) in raw_items {
        let text = raw_item.text.unwrap_or_default();
        let id = match stored_id {
            Some(id)
                if !id.is_empty()
                    && !items.iter().any(|item| item.id.as_str() == id) =>
            {
                ItemId::new(id)
            }
            _ => doc.ids.next_item_id(|id| {
                stored_item_ids.contains(id.as_str())
                    || items.iter().any(|item| &item.id == id)
            }),
        };

        let zone_id = raw_item.zone_id.map(|z| ZoneId::new(z.into_string()));
        let zone_id = match zone_id {
            Some(zone_id) if zone_ids.contains(&zone_id) => Some(zone_id),
            Some(_) => {
                orphans += 1;
                None
            }
            None => None,
        };

        items.push(Item { id, text, zone_id });
    }
    if orphans > 0 {
        log::warn!(
            "Returned {} item(s) pointing at missing zones to the pool",
            orphans
        );
    }
    doc.items = items;
    doc
}

/// Render a document as the editor's `value`
///
/// An entirely empty document is the empty string, the canonical "nothing
/// entered yet" value.
pub fn serialize_document(doc: &Document) -> String {
    if doc.is_empty() {
        return String::new();
    }

    let out = DocumentOut {
        question: &doc.question,
        items: &doc.items,
        zones: &doc.zones,
    };
    // Plain strings, ids and finite numbers always serialize
    serde_json::to_string_pretty(&out).unwrap_or_else(|err| {
        log::warn!("Failed to serialize question document: {}", err);
        String::new()
    })
}
