use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single workspace item. The collection is seeded at startup and never
/// mutated, so `created_at` reflects process start rather than a real
/// creation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_at: Utc::now(),
        }
    }
}
