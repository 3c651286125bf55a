use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::prize::Prize;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrizeRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Prize>>;
    async fn get_all(&self) -> AppResult<Vec<Prize>>;
    /// Derived side of the Organization<->Prize 1:1; at most one record.
    async fn find_by_organization(&self, organization_id: &Uuid) -> AppResult<Option<Prize>>;
    /// Derived inverse of the Prize->Author reference.
    async fn find_by_author(&self, author_id: &Uuid) -> AppResult<Vec<Prize>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, prize: &Prize) -> AppResult<Prize>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, prize: &Prize) -> AppResult<Prize>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
