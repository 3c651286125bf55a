use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::editorial::Editorial;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EditorialRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Editorial>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Editorial>>;
    async fn get_all(&self) -> AppResult<Vec<Editorial>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, editorial: &Editorial) -> AppResult<Editorial>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, editorial: &Editorial) -> AppResult<Editorial>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
