//! User actions on a question document
//!
//! Every change an authoring UI can make is one [`EditCommand`]. Commands
//! also have a compact text form, used by the command line:
//!
//! ```text
//! add-item=Apple          remove-item=item-1      rename-item=item-1:Pear
//! add-zone                remove-zone=zone-2      relabel-zone=zone-2:Fruit
//! assign=zone-2:item-1    unassign=item-1         move-zone=zone-2:0
//! question=Sort the fruit
//! ```

use crate::core::errors::{
    anyhow, bail, split_pair, EditorContext, EditorResult,
};
use crate::data::document::Document;
use crate::data::ids::{ItemId, ZoneId};
use crate::editing::edit_type::EditType;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    SetQuestion { text: String },
    AddItem { text: String },
    RemoveItem { item: ItemId },
    RenameItem { item: ItemId, text: String },
    AddZone,
    RemoveZone { zone: ZoneId },
    RelabelZone { zone: ZoneId, label: String },
    MoveZone { zone: ZoneId, index: usize },
    AssignItem { zone: ZoneId, item: ItemId },
    UnassignItem { item: ItemId },
}

impl EditCommand {
    /// Apply the command to `doc`
    pub fn apply(&self, doc: &mut Document) -> EditorResult<()> {
        match self {
            EditCommand::SetQuestion { text } => doc.set_question(text.clone()),
            EditCommand::AddItem { text } => {
                doc.add_item(text.clone());
            }
            EditCommand::RemoveItem { item } => {
                doc.remove_item(item)?;
            }
            EditCommand::RenameItem { item, text } => {
                doc.rename_item(item, text.clone())?
            }
            EditCommand::AddZone => {
                doc.add_zone();
            }
            EditCommand::RemoveZone { zone } => {
                doc.remove_zone(zone)?;
            }
            EditCommand::RelabelZone { zone, label } => {
                doc.relabel_zone(zone, label.clone())?
            }
            EditCommand::MoveZone { zone, index } => {
                doc.move_zone(zone, *index)?
            }
            EditCommand::AssignItem { zone, item } => {
                doc.assign_item(zone, item)?
            }
            EditCommand::UnassignItem { item } => doc.unassign_item(item)?,
        }
        Ok(())
    }

    /// How this command groups with its predecessor for undo
    pub fn edit_type(&self) -> EditType {
        match self {
            EditCommand::SetQuestion { .. } => EditType::Question,
            EditCommand::RenameItem { item, .. } => {
                EditType::ItemText(item.clone())
            }
            EditCommand::RelabelZone { zone, .. } => {
                EditType::ZoneLabel(zone.clone())
            }
            _ => EditType::Normal,
        }
    }
}

impl FromStr for EditCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> EditorResult<Self> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let required = || {
            arg.ok_or_else(|| anyhow!("Command '{}' needs an argument", name))
        };

        let command = match name {
            "question" => EditCommand::SetQuestion {
                text: required()?.to_string(),
            },
            "add-item" => EditCommand::AddItem {
                text: arg.unwrap_or_default().to_string(),
            },
            "remove-item" => EditCommand::RemoveItem {
                item: ItemId::new(required()?),
            },
            "rename-item" => {
                let (item, text) = split_pair(required()?, name)?;
                EditCommand::RenameItem {
                    item: ItemId::new(item),
                    text: text.to_string(),
                }
            }
            "add-zone" => EditCommand::AddZone,
            "remove-zone" => EditCommand::RemoveZone {
                zone: ZoneId::new(required()?),
            },
            "relabel-zone" => {
                let (zone, label) = split_pair(required()?, name)?;
                EditCommand::RelabelZone {
                    zone: ZoneId::new(zone),
                    label: label.to_string(),
                }
            }
            "move-zone" => {
                let (zone, index) = split_pair(required()?, name)?;
                EditCommand::MoveZone {
                    zone: ZoneId::new(zone),
                    index: index
                        .parse::<usize>()
                        .with_zone_context("move", zone)?,
                }
            }
            "assign" => {
                let (zone, item) = split_pair(required()?, name)?;
                EditCommand::AssignItem {
                    zone: ZoneId::new(zone),
                    item: ItemId::new(item),
                }
            }
            "unassign" => EditCommand::UnassignItem {
                item: ItemId::new(required()?),
            },
            other => bail!("Unknown edit command: '{}'", other),
        };
        Ok(command)
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditCommand::SetQuestion { text } => write!(f, "question={text}"),
            EditCommand::AddItem { text } => write!(f, "add-item={text}"),
            EditCommand::RemoveItem { item } => write!(f, "remove-item={item}"),
            EditCommand::RenameItem { item, text } => {
                write!(f, "rename-item={item}:{text}")
            }
            EditCommand::AddZone => write!(f, "add-zone"),
            EditCommand::RemoveZone { zone } => write!(f, "remove-zone={zone}"),
            EditCommand::RelabelZone { zone, label } => {
                write!(f, "relabel-zone={zone}:{label}")
            }
            EditCommand::MoveZone { zone, index } => {
                write!(f, "move-zone={zone}:{index}")
            }
            EditCommand::AssignItem { zone, item } => {
                write!(f, "assign={zone}:{item}")
            }
            EditCommand::UnassignItem { item } => write!(f, "unassign={item}"),
        }
    }
}
