use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::modules::book::domain::{
    entities::book::Book, repositories::book_repository::BookRepository,
};
use crate::shared::errors::AppResult;

/// In-memory book store. Attribute lookups are linear scans over the
/// arena, mirroring the simple attribute-based lookups of the store
/// contract.
#[derive(Default)]
pub struct BookRepositoryImpl {
    rows: DashMap<Uuid, Book>,
}

impl BookRepositoryImpl {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Book>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.rows.iter().map(|row| row.value().clone()).collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Vec<Book>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().isbn == isbn)
            .map(|row| row.value().clone())
            .collect())
    }

    async fn find_by_author(&self, author_id: &Uuid) -> AppResult<Vec<Book>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().has_author(author_id))
            .map(|row| row.value().clone())
            .collect())
    }

    async fn find_by_editorial(&self, editorial_id: &Uuid) -> AppResult<Vec<Book>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.value().is_published_by(editorial_id))
            .map(|row| row.value().clone())
            .collect())
    }

    async fn save(&self, book: &Book) -> AppResult<Book> {
        let mut stored = book.clone();
        stored.id = Uuid::new_v4();
        self.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        self.rows.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.rows.remove(id);
        Ok(())
    }
}
