use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::editorial::Editorial, repositories::editorial_repository::EditorialRepository,
};
use crate::modules::book::{Book, BookRepository};
use crate::shared::domain::value_objects::ReplacePolicy;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Editorial-side view of the Editorial->Books one-to-many relation.
/// The book's `editorial_id` stays the authoritative field; this service
/// only ever writes through it.
pub struct EditorialBooksService {
    editorial_repo: Arc<dyn EditorialRepository>,
    book_repo: Arc<dyn BookRepository>,
    policy: ReplacePolicy,
}

impl EditorialBooksService {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepository>,
        book_repo: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            editorial_repo,
            book_repo,
            policy: ReplacePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReplacePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn add_book(&self, book_id: &Uuid, editorial_id: &Uuid) -> AppResult<Book> {
        log_debug!("Adding book {} to editorial {}", book_id, editorial_id);

        let mut book = self.require_book(book_id).await?;
        self.require_editorial(editorial_id).await?;

        book.editorial_id = Some(*editorial_id);
        let updated = self.book_repo.update(&book).await?;

        log_info!("Added book {} to editorial {}", book_id, editorial_id);
        Ok(updated)
    }

    pub async fn get_books(&self, editorial_id: &Uuid) -> AppResult<Vec<Book>> {
        self.require_editorial(editorial_id).await?;
        self.book_repo.find_by_editorial(editorial_id).await
    }

    /// Fails NotFound when either id is dangling, IllegalOperation when
    /// both exist but the book is published by another editorial.
    pub async fn get_book(&self, editorial_id: &Uuid, book_id: &Uuid) -> AppResult<Book> {
        self.require_editorial(editorial_id).await?;
        let book = self.require_book(book_id).await?;

        if !book.is_published_by(editorial_id) {
            return Err(AppError::IllegalOperation(
                "The book is not associated to the editorial".to_string(),
            ));
        }

        Ok(book)
    }

    /// Points every resolvable book in the list at this editorial; ids
    /// that do not resolve are skipped rather than failing the batch.
    /// Under the default `Merge` policy books omitted from the list keep
    /// whatever editorial they already had; under `Exact` the omitted
    /// ones currently published here are cleared.
    pub async fn replace_books(
        &self,
        editorial_id: &Uuid,
        book_ids: &[Uuid],
    ) -> AppResult<Vec<Book>> {
        log_debug!(
            "Replacing books of editorial {} with {} entries",
            editorial_id,
            book_ids.len()
        );

        self.require_editorial(editorial_id).await?;

        let mut result = Vec::with_capacity(book_ids.len());
        for book_id in book_ids {
            let mut book = match self.book_repo.find_by_id(book_id).await? {
                Some(book) => book,
                None => continue,
            };

            if !book.is_published_by(editorial_id) {
                book.editorial_id = Some(*editorial_id);
                book = self.book_repo.update(&book).await?;
            }
            result.push(book);
        }

        if self.policy == ReplacePolicy::Exact {
            for mut book in self.book_repo.find_by_editorial(editorial_id).await? {
                if !book_ids.contains(&book.id) {
                    book.editorial_id = None;
                    self.book_repo.update(&book).await?;
                }
            }
        }

        Ok(result)
    }

    async fn require_editorial(&self, editorial_id: &Uuid) -> AppResult<Editorial> {
        self.editorial_repo
            .find_by_id(editorial_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Editorial with ID {} not found", editorial_id))
            })
    }

    async fn require_book(&self, book_id: &Uuid) -> AppResult<Book> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))
    }
}
