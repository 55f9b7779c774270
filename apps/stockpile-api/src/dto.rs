//! Response bodies.

use serde::Serialize;
use stockpile_core::InventoryItem;

/// JSON shape of one inventory item.
///
/// ```json
/// {"id": 1, "name": "Cool Runnings", "location": "AD12", "available": true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub available: bool,
}

impl From<&InventoryItem> for ItemResponse {
    fn from(item: &InventoryItem) -> Self {
        ItemResponse {
            id: item.id().get(),
            name: item.name().to_string(),
            location: item.location().to_string(),
            available: item.is_available(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpile_core::ItemId;

    #[test]
    fn test_item_json_shape() {
        let item = InventoryItem::reincarnate(ItemId::new(4), "Cool Runnings", "AD12", false);
        let json = serde_json::to_value(ItemResponse::from(&item)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "name": "Cool Runnings",
                "location": "AD12",
                "available": false
            })
        );
    }
}
