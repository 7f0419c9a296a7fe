//! Document model
//!
//! The document is the ordered list of every text item on the canvas and the
//! unit of undo/redo snapshotting. Items are held behind shared handles, so
//! cloning a document is cheap and a snapshot shares every item its successor
//! did not replace.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::text_item::{ItemId, Position, TextItem};

/// Ordered collection of text items (insertion order)
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "Vec<TextItem>", into = "Vec<TextItem>")]
pub struct Document {
    items: Vec<Arc<TextItem>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document a fresh editor opens with
    pub fn seeded() -> Self {
        Self::from_items(vec![TextItem::new(
            1,
            "Celebrare",
            Position::new(100.0, 100.0),
        )])
    }

    /// Build a document from owned items.
    ///
    /// Items with an id already present are dropped so that id uniqueness
    /// holds for every document this type can represent.
    pub fn from_items(items: Vec<TextItem>) -> Self {
        let mut doc = Self::new();
        for item in items {
            if doc.contains(item.id) {
                log::warn!("Dropping duplicate text item id {}", item.id);
                continue;
            }
            doc.items.push(Arc::new(item));
        }
        doc
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    /// Shared handles, for identity checks between snapshots
    pub fn handles(&self) -> &[Arc<TextItem>] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&TextItem> {
        self.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Id for the next added item: `max id + 1`, or 1 for an empty document
    pub fn next_id(&self) -> ItemId {
        self.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }

    /// New document with `item` appended; `self` is left untouched
    pub fn with_item(&self, item: TextItem) -> Self {
        let mut items = self.items.clone();
        items.push(Arc::new(item));
        Self { items }
    }

    /// New document in which the item with `id` is replaced by `update(item)`.
    ///
    /// All other items keep their shared handles. Returns `None` when no item
    /// has `id`.
    pub fn with_updated<F>(&self, id: ItemId, update: F) -> Option<Self>
    where
        F: FnOnce(&TextItem) -> TextItem,
    {
        let index = self.items.iter().position(|item| item.id == id)?;
        let mut items = self.items.clone();
        let replacement = update(&items[index]);
        debug_assert_eq!(replacement.id, id, "updates must not change item ids");
        items[index] = Arc::new(replacement);
        Some(Self { items })
    }

    pub fn to_items(&self) -> Vec<TextItem> {
        self.iter().cloned().collect()
    }
}

impl From<Vec<TextItem>> for Document {
    fn from(items: Vec<TextItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Document> for Vec<TextItem> {
    fn from(doc: Document) -> Self {
        doc.to_items()
    }
}
