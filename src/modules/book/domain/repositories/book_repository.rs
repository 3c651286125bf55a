use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::book::Book;
use crate::shared::errors::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Book>>;
    async fn get_all(&self) -> AppResult<Vec<Book>>;
    /// ISBN is unique across books, so this returns at most one record;
    /// the list shape mirrors the store's attribute-lookup contract.
    async fn find_by_isbn(&self, isbn: &str) -> AppResult<Vec<Book>>;
    /// Derived inverse of the Author<->Book association.
    async fn find_by_author(&self, author_id: &Uuid) -> AppResult<Vec<Book>>;
    /// Derived inverse of the Book->Editorial reference.
    async fn find_by_editorial(&self, editorial_id: &Uuid) -> AppResult<Vec<Book>>;
    /// Insert; the store assigns the id of the persisted record.
    async fn save(&self, book: &Book) -> AppResult<Book>;
    /// Replace the record stored under the entity's id.
    async fn update(&self, book: &Book) -> AppResult<Book>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}
