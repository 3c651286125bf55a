use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::prize::domain::{
    entities::prize::Prize, repositories::prize_repository::PrizeRepository,
};
use crate::shared::errors::AppResult;

/// In-memory prize store.
#[derive(Default)]
pub struct PrizeRepositoryImpl {
    rows: DashMap<Uuid, Prize>,
}

impl PrizeRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl PrizeRepository for PrizeRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Prize>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Prize>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn find_by_organization(&self, organization_id: &Uuid) -> AppResult<Option<Prize>> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.value().organization_id.as_ref() == Some(organization_id))
            .map(|row| row.value().clone()))
    }

    async fn find_by_author(&self, author_id: &Uuid) -> AppResult<Vec<Prize>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().author_id.as_ref() == Some(author_id))
            .map(|row| row.value().clone())
            .collect())
    }

    async fn save(&self, prize: &Prize) -> AppResult<Prize> {
        let mut stored = prize.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, prize: &Prize) -> AppResult<Prize> {
        self.rows.insert(prize.id, prize.clone());
        Ok(prize.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }
}
