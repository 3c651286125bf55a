use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A publisher. Its book list is derived by querying books whose
/// `editorial_id` points here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    pub id: Uuid,
    pub name: String,
}

impl Editorial {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }
}
