use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::author::Author;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Author>>;
    async fn get_all(&self) -> AppResult<Vec<Author>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, author: &Author) -> AppResult<Author>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, author: &Author) -> AppResult<Author>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
