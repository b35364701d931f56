use crate::models::Item;
use std::sync::Arc;

/// Process-lifetime collection of items. Built once at startup and shared
/// read-only across handlers; there is no mutation path.
#[derive(Clone)]
pub struct ItemStore {
    items: Arc<Vec<Item>>,
}

impl ItemStore {
    /// Build the store from the hardcoded seed data.
    pub fn seeded() -> Self {
        Self {
            items: Arc::new(vec![
                Item::new("1", "Dashboard", "Overview of your workspace"),
                Item::new("2", "Projects", "Manage your projects"),
                Item::new("3", "Tasks", "Track your tasks"),
                Item::new("4", "Analytics", "View analytics and reports"),
            ]),
        }
    }

    /// Full collection in insertion order.
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    /// Exact, case-sensitive id match. Linear scan; the collection is small
    /// and fixed.
    pub fn get_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
