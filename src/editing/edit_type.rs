//! Types of document modifications, for the purposes of undo.

use crate::data::ids::{ItemId, ZoneId};

/// Types of document modifications, for the purposes of undo.
///
/// Typing into a text field arrives as one edit per keystroke. Consecutive
/// text edits of the same field are combined into a single undo group, so
/// undo restores the text as it was before the field was touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditType {
    /// Any change that always gets its own undo group
    Normal,
    /// Editing the question prompt
    Question,
    /// Editing the text of one item
    ItemText(ItemId),
    /// Editing the label of one zone
    ZoneLabel(ZoneId),
}

impl EditType {
    /// Check if an edit of this type following `previous` starts a new group
    pub fn needs_new_undo_group(&self, previous: &EditType) -> bool {
        match (previous, self) {
            (EditType::Question, EditType::Question) => false,
            (EditType::ItemText(a), EditType::ItemText(b)) => a != b,
            (EditType::ZoneLabel(a), EditType::ZoneLabel(b)) => a != b,
            // Structural edits are always their own group
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_into_one_field_groups() {
        let item = EditType::ItemText(ItemId::new("item-1"));
        assert!(!item.needs_new_undo_group(&item.clone()));
        assert!(!EditType::Question.needs_new_undo_group(&EditType::Question));
    }

    #[test]
    fn switching_fields_starts_a_group() {
        let first = EditType::ItemText(ItemId::new("item-1"));
        let second = EditType::ItemText(ItemId::new("item-2"));
        let zone = EditType::ZoneLabel(ZoneId::new("zone-1"));
        assert!(second.needs_new_undo_group(&first));
        assert!(zone.needs_new_undo_group(&first));
        assert!(EditType::Normal.needs_new_undo_group(&EditType::Normal));
    }
}
