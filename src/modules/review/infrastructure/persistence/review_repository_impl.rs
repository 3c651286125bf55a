use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::review::domain::{
    entities::review::Review, repositories::review_repository::ReviewRepository,
};
use crate::shared::errors::AppResult;

/// In-memory review store.
#[derive(Default)]
pub struct ReviewRepositoryImpl {
    rows: DashMap<Uuid, Review>,
}

impl ReviewRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Review>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn find_by_book(&self, book_id: &Uuid) -> AppResult<Vec<Review>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().book_id.as_ref() == Some(book_id))
            .map(|row| row.value().clone())
            .collect())
    }

    async fn find_by_book_and_id(
        &self,
        book_id: &Uuid,
        review_id: &Uuid,
    ) -> AppResult<Option<Review>> {
        Ok(self
            .rows
            .get(review_id)
            .filter(|row| row.value().book_id.as_ref() == Some(book_id))
            .map(|row| row.value().clone()))
    }

    async fn save(&self, review: &Review) -> AppResult<Review> {
        let mut stored = review.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, review: &Review) -> AppResult<Review> {
        self.rows.insert(review.id, review.clone());
        Ok(review.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }

    async fn delete_by_book(&self, book_id: &Uuid) -> AppResult<()> {
        self.rows
            .retain(|_, review| review.book_id.as_ref() != Some(book_id));
        Ok(())
    }
}
