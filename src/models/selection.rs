//! Selection state

use serde::{Deserialize, Serialize};

use crate::models::text_item::ItemId;

/// Which text item, if any, the toolbar and drag controller act on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Selection {
    #[default]
    None,
    Selected(ItemId),
}

impl Selection {
    pub fn id(self) -> Option<ItemId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(self, id: ItemId) -> bool {
        self == Selection::Selected(id)
    }
}

impl From<Option<ItemId>> for Selection {
    fn from(id: Option<ItemId>) -> Self {
        id.map_or(Selection::None, Selection::Selected)
    }
}
