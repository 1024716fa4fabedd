use super::types::Item;
use serde::{Deserialize, Serialize};

/// The hero's bag. Stackable items with the same name, type and rarity share
/// one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Adds an item, merging its quantity into a matching stack if one exists.
    pub fn add(&mut self, item: Item) {
        if item.stackable {
            if let Some(existing) = self.items.iter_mut().find(|i| i.stacks_with(&item)) {
                existing.quantity = Some(existing.count() + item.count());
                return;
            }
        }
        self.items.push(item);
    }

    /// Removes the whole entry. Returns it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Takes one unit of an entry. Returns a copy of the item as it was.
    pub fn take_one(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items[index].clone();
        if item.stackable && item.count() > 1 {
            self.items[index].quantity = Some(item.count() - 1);
        } else {
            self.items.remove(index);
        }
        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
