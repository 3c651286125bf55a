use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A review of a book. `book_id` is set by the service from the parent
/// id the caller addresses the review under; it is always `Some` once
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub source: Option<String>,
    pub description: Option<String>,
    pub book_id: Option<Uuid>,
}

impl Review {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            source: None,
            description: None,
            book_id: None,
        }
    }

    pub fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}
