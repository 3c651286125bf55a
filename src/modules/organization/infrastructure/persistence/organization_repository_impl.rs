use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::organization::domain::{
    entities::organization::Organization,
    repositories::organization_repository::OrganizationRepository,
};
use crate::shared::errors::AppResult;

/// In-memory organization store.
#[derive(Default)]
pub struct OrganizationRepositoryImpl {
    rows: DashMap<Uuid, Organization>,
}

impl OrganizationRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl OrganizationRepository for OrganizationRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Organization>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Organization>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.value().name == name)
            .map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Organization>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn save(&self, organization: &Organization) -> AppResult<Organization> {
        let mut stored = organization.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, organization: &Organization) -> AppResult<Organization> {
        self.rows.insert(organization.id, organization.clone());
        Ok(organization.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }
}
