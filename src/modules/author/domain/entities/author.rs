use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog author. Books and prizes reference the author by id; both
/// inverse collections are derived by query, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub birth_date: NaiveDate,
}

impl Author {
    pub fn new(name: String, birth_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            image: None,
            birth_date,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }
}
