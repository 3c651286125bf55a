use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::editorial::domain::{
    entities::editorial::Editorial, repositories::editorial_repository::EditorialRepository,
};
use crate::shared::errors::AppResult;

/// In-memory editorial store.
#[derive(Default)]
pub struct EditorialRepositoryImpl {
    rows: DashMap<Uuid, Editorial>,
}

impl EditorialRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl EditorialRepository for EditorialRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Editorial>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Editorial>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.value().name == name)
            .map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Editorial>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn save(&self, editorial: &Editorial) -> AppResult<Editorial> {
        let mut stored = editorial.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, editorial: &Editorial) -> AppResult<Editorial> {
        self.rows.insert(editorial.id, editorial.clone());
        Ok(editorial.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }
}
