use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog book. The book owns both association fields of the model:
/// `editorial_id` (many-to-one, required except transiently during
/// creation validation) and `author_ids` (the authoritative side of the
/// Author<->Book many-to-many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub name: String,
    pub isbn: String,
    pub image: Option<String>,
    pub publishing_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub editorial_id: Option<Uuid>,
    pub author_ids: Vec<Uuid>,
}

impl Book {
    pub fn new(name: String, isbn: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            isbn,
            image: None,
            publishing_date: None,
            description: None,
            editorial_id: None,
            author_ids: Vec::new(),
        }
    }

    pub fn with_editorial(mut self, editorial_id: Uuid) -> Self {
        self.editorial_id = Some(editorial_id);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_publishing_date(mut self, publishing_date: NaiveDate) -> Self {
        self.publishing_date = Some(publishing_date);
        self
    }

    /// Attach an author; returns false when already attached.
    pub fn add_author(&mut self, author_id: Uuid) -> bool {
        if !self.author_ids.contains(&author_id) {
            self.author_ids.push(author_id);
            true
        } else {
            false
        }
    }

    /// Detach an author; returns false when the author was not attached.
    pub fn remove_author(&mut self, author_id: &Uuid) -> bool {
        let original_len = self.author_ids.len();
        self.author_ids.retain(|id| id != author_id);
        self.author_ids.len() < original_len
    }

    pub fn has_author(&self, author_id: &Uuid) -> bool {
        self.author_ids.contains(author_id)
    }

    pub fn is_published_by(&self, editorial_id: &Uuid) -> bool {
        self.editorial_id.as_ref() == Some(editorial_id)
    }
}
