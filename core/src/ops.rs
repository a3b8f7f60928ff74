//! The five shopping-list operations.
//!
//! Each function works directly on a borrowed `ItemStore`: reads take `&`,
//! mutations take `&mut` and change the stored items in place. Returned
//! items are clones of what the store holds after the operation.

use crate::error::ItemError;
use crate::item::{Item, ItemPatch, NewItem};
use crate::store::ItemStore;

pub fn list(store: &ItemStore) -> Vec<Item> {
    store.items().to_vec()
}

pub fn get(store: &ItemStore, name: &str) -> Result<Item, ItemError> {
    store
        .find(name)
        .cloned()
        .ok_or_else(|| ItemError::NotFound(name.to_string()))
}

/// Add an item to the end of the list.
///
/// A duplicate name is reported before missing fields, so
/// `{"name": "pickles"}` on a list already holding pickles is a duplicate,
/// not missing data. Uniqueness is only enforced here.
pub fn create(store: &mut ItemStore, input: NewItem) -> Result<Item, ItemError> {
    if let Some(name) = input.name() {
        if store.find(name).is_some() {
            return Err(ItemError::AlreadyExists(name.to_string()));
        }
    }
    let item = input.into_item().ok_or(ItemError::MissingData)?;
    store.push(item.clone());
    Ok(item)
}

pub fn update(store: &mut ItemStore, name: &str, patch: ItemPatch) -> Result<Item, ItemError> {
    let item = store
        .find_mut(name)
        .ok_or_else(|| ItemError::NotFound(name.to_string()))?;
    patch.apply_to(item);
    Ok(item.clone())
}

pub fn delete(store: &mut ItemStore, name: &str) -> Result<Item, ItemError> {
    let position = store
        .position(name)
        .ok_or_else(|| ItemError::NotFound(name.to_string()))?;
    store
        .remove_at(position)
        .ok_or_else(|| ItemError::NotFound(name.to_string()))
}
