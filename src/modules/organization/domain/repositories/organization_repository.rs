use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::organization::Organization;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Organization>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Organization>>;
    async fn get_all(&self) -> AppResult<Vec<Organization>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, organization: &Organization) -> AppResult<Organization>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, organization: &Organization) -> AppResult<Organization>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
