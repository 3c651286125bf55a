use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::review::Review;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Review>>;
    /// Reviews of one book, the derived inverse of `Review.book_id`.
    async fn find_by_book(&self, book_id: &Uuid) -> AppResult<Vec<Review>>;
    /// Scoped lookup: the review only resolves under the book it belongs to.
    async fn find_by_book_and_id(&self, book_id: &Uuid, review_id: &Uuid)
        -> AppResult<Option<Review>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, review: &Review) -> AppResult<Review>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, review: &Review) -> AppResult<Review>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
    /// Orphan removal when a book is deleted.
    async fn delete_by_book(&self, book_id: &Uuid) -> AppResult<()>;
}
