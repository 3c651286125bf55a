use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{entities::book::Book, repositories::book_repository::BookRepository};
use crate::modules::author::{Author, AuthorRepository};
use crate::shared::domain::value_objects::ReplacePolicy;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Book-side view of the Author<->Book many-to-many association; the
/// inverse of `AuthorBooksService` over the same underlying relation.
pub struct BookAuthorsService {
    book_repo: Arc<dyn BookRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    policy: ReplacePolicy,
}

impl BookAuthorsService {
    pub fn new(book_repo: Arc<dyn BookRepository>, author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self {
            book_repo,
            author_repo,
            policy: ReplacePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReplacePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn add_author(&self, book_id: &Uuid, author_id: &Uuid) -> AppResult<Author> {
        log_debug!("Associating author {} to book {}", author_id, book_id);

        let mut book = self.require_book(book_id).await?;
        let author = self.require_author(author_id).await?;

        if book.add_author(author.id) {
            self.book_repo.update(&book).await?;
            log_info!("Associated author {} to book {}", author_id, book_id);
        }

        Ok(author)
    }

    pub async fn get_authors(&self, book_id: &Uuid) -> AppResult<Vec<Author>> {
        let book = self.require_book(book_id).await?;

        let mut authors = Vec::with_capacity(book.author_ids.len());
        for author_id in &book.author_ids {
            if let Some(author) = self.author_repo.find_by_id(author_id).await? {
                authors.push(author);
            }
        }

        Ok(authors)
    }

    /// Fails NotFound when either id is dangling, IllegalOperation when
    /// both exist but the author is not associated to the book.
    pub async fn get_author(&self, book_id: &Uuid, author_id: &Uuid) -> AppResult<Author> {
        let book = self.require_book(book_id).await?;
        let author = self.require_author(author_id).await?;

        if !book.has_author(author_id) {
            return Err(AppError::IllegalOperation(
                "The author is not associated to the book".to_string(),
            ));
        }

        Ok(author)
    }

    /// Attaches every author in the list to the book. Under the default
    /// `Merge` policy authors omitted from the list stay attached; under
    /// `Exact` they are detached.
    pub async fn replace_authors(
        &self,
        book_id: &Uuid,
        author_ids: &[Uuid],
    ) -> AppResult<Vec<Author>> {
        log_debug!(
            "Replacing authors of book {} with {} entries",
            book_id,
            author_ids.len()
        );

        let mut book = self.require_book(book_id).await?;

        let mut authors = Vec::with_capacity(author_ids.len());
        for author_id in author_ids {
            authors.push(self.require_author(author_id).await?);
        }

        let mut changed = false;
        for author in &authors {
            changed |= book.add_author(author.id);
        }

        if self.policy == ReplacePolicy::Exact {
            let before = book.author_ids.len();
            book.author_ids.retain(|id| author_ids.contains(id));
            changed |= book.author_ids.len() != before;
        }

        if changed {
            self.book_repo.update(&book).await?;
        }

        Ok(authors)
    }

    /// Detaches the author from the book. Removing a non-associated pair
    /// is a no-op, not an error.
    pub async fn remove_author(&self, book_id: &Uuid, author_id: &Uuid) -> AppResult<()> {
        log_debug!("Removing author {} from book {}", author_id, book_id);

        let mut book = self.require_book(book_id).await?;
        self.require_author(author_id).await?;

        if book.remove_author(author_id) {
            self.book_repo.update(&book).await?;
            log_info!("Removed author {} from book {}", author_id, book_id);
        }

        Ok(())
    }

    async fn require_book(&self, book_id: &Uuid) -> AppResult<Book> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))
    }

    async fn require_author(&self, author_id: &Uuid) -> AppResult<Author> {
        self.author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with ID {} not found", author_id)))
    }
}
