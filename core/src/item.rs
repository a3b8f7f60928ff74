//! Item model and request payloads.
//!
//! # Design
//! `price` is kept as the raw JSON value the client sent, so `3` is echoed
//! back as `3`, `1.45` as `1.45` and a patched `"3.50"` as `"3.50"`. Fields
//! beyond `name` and `price` supplied at creation are carried in `extra` and
//! flattened back out on the wire.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A named, priced entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            extra: Map::new(),
        }
    }
}

/// Request payload for adding an item.
///
/// `name` and `price` are decoded as arbitrary JSON so that
/// [`crate::ops::create`], not the decoder, rejects bad input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewItem {
    /// The requested name, when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// Returns the completed item when `name` is a non-empty string and
    /// `price` is truthy. `null`, `false`, `0` and `""` count as missing.
    pub fn into_item(self) -> Option<Item> {
        let name = match self.name {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return None,
        };
        let price = self.price.filter(is_truthy)?;
        Some(Item {
            name,
            price,
            extra: self.extra,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Request payload for updating an item. Only `name` and `price` may be
/// changed; any other key in the JSON is ignored.
///
/// A `price` key that is present overwrites the stored price whatever its
/// JSON type, `null` included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Value>,
}

/// Maps a present key to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Overwrite the fields present in the patch; absent fields keep their value.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_item(value: Value) -> NewItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn item_serializes_flat_with_extra_fields() {
        let mut item = Item::new("popsicle", 2);
        item.extra.insert("aisle".to_string(), json!(7));
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"name": "popsicle", "price": 2, "aisle": 7}));
    }

    #[test]
    fn price_keeps_its_json_representation() {
        let item: Item = serde_json::from_str(r#"{"name":"popsicle","price":1.45}"#).unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"name":"popsicle","price":1.45}"#);
    }

    #[test]
    fn new_item_fields_are_optional() {
        let input = new_item(json!({}));
        assert!(input.name.is_none());
        assert!(input.price.is_none());
        assert!(input.into_item().is_none());
    }

    #[test]
    fn new_item_decodes_any_json_type() {
        let input = new_item(json!({"name": 5, "price": [1]}));
        assert_eq!(input.name(), None);
        assert!(input.into_item().is_none());
    }

    #[test]
    fn new_item_treats_falsy_price_as_missing() {
        for price in [json!(0), json!(0.0), json!(""), json!(false), json!(null)] {
            let input = new_item(json!({"name": "gum", "price": price}));
            assert!(input.into_item().is_none(), "{price}");
        }
    }

    #[test]
    fn new_item_accepts_truthy_non_number_price() {
        let item = new_item(json!({"name": "gum", "price": "3"})).into_item().unwrap();
        assert_eq!(item.price, json!("3"));
    }

    #[test]
    fn new_item_treats_empty_name_as_missing() {
        assert!(new_item(json!({"name": "", "price": 1})).into_item().is_none());
    }

    #[test]
    fn new_item_keeps_unknown_fields() {
        let item = new_item(json!({"name": "gum", "price": 1, "brand": "acme"}))
            .into_item()
            .unwrap();
        assert_eq!(item.extra.get("brand"), Some(&json!("acme")));
    }

    #[test]
    fn patch_ignores_keys_outside_the_allow_list() {
        let patch: ItemPatch = serde_json::from_str(r#"{"color":"green"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_only_overwrites_present_fields() {
        let mut item = Item::new("pickles", 2);
        let patch: ItemPatch = serde_json::from_str(r#"{"price":3}"#).unwrap();
        patch.apply_to(&mut item);
        assert_eq!(item.name, "pickles");
        assert_eq!(item.price, json!(3));
    }

    #[test]
    fn patch_price_accepts_any_json_type() {
        let mut item = Item::new("pickles", 2);
        let patch: ItemPatch = serde_json::from_str(r#"{"price":"3.50"}"#).unwrap();
        patch.apply_to(&mut item);
        assert_eq!(item.price, json!("3.50"));
    }

    #[test]
    fn patch_present_null_price_overwrites() {
        let mut item = Item::new("pickles", 2);
        let patch: ItemPatch = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert!(!patch.is_empty());
        patch.apply_to(&mut item);
        assert_eq!(item.price, Value::Null);
    }
}
