use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::author::domain::{
    entities::author::Author, repositories::author_repository::AuthorRepository,
};
use crate::shared::errors::AppResult;

/// In-memory author store: an arena of records keyed by id.
#[derive(Default)]
pub struct AuthorRepositoryImpl {
    rows: DashMap<Uuid, Author>,
}

impl AuthorRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl AuthorRepository for AuthorRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Author>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Author>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn save(&self, author: &Author) -> AppResult<Author> {
        let mut stored = author.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, author: &Author) -> AppResult<Author> {
        self.rows.insert(author.id, author.clone());
        Ok(author.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }
}
