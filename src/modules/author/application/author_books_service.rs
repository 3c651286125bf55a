use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::author::Author, repositories::author_repository::AuthorRepository,
};
use crate::modules::book::{Book, BookRepository};
use crate::shared::domain::value_objects::ReplacePolicy;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Author-side view of the Author<->Book many-to-many association.
///
/// `Book.author_ids` is the authoritative side of the relation; this
/// service mutates it and derives the author's book list by query.
pub struct AuthorBooksService {
    author_repo: Arc<dyn AuthorRepository>,
    book_repo: Arc<dyn BookRepository>,
    policy: ReplacePolicy,
}

impl AuthorBooksService {
    pub fn new(author_repo: Arc<dyn AuthorRepository>, book_repo: Arc<dyn BookRepository>) -> Self {
        Self {
            author_repo,
            book_repo,
            policy: ReplacePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReplacePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn add_book(&self, author_id: &Uuid, book_id: &Uuid) -> AppResult<Book> {
        log_debug!("Associating book {} to author {}", book_id, author_id);

        self.require_author(author_id).await?;
        let mut book = self.require_book(book_id).await?;

        // Re-adding an already associated author is a no-op
        if book.add_author(*author_id) {
            book = self.book_repo.update(&book).await?;
            log_info!("Associated book {} to author {}", book_id, author_id);
        }

        Ok(book)
    }

    pub async fn get_books(&self, author_id: &Uuid) -> AppResult<Vec<Book>> {
        self.require_author(author_id).await?;
        self.book_repo.find_by_author(author_id).await
    }

    /// Fails NotFound when either id is dangling, IllegalOperation when
    /// both exist but the book is not associated to the author.
    pub async fn get_book(&self, author_id: &Uuid, book_id: &Uuid) -> AppResult<Book> {
        self.require_author(author_id).await?;
        let book = self.require_book(book_id).await?;

        if !book.has_author(author_id) {
            return Err(AppError::IllegalOperation(
                "The book is not associated to the author".to_string(),
            ));
        }

        Ok(book)
    }

    /// Attaches the author to every book in the list. Under the default
    /// `Merge` policy books omitted from the list keep the author; under
    /// `Exact` the author is detached from them.
    pub async fn replace_books(&self, author_id: &Uuid, book_ids: &[Uuid]) -> AppResult<Vec<Book>> {
        log_debug!(
            "Replacing books of author {} with {} entries",
            author_id,
            book_ids.len()
        );

        self.require_author(author_id).await?;

        let mut books = Vec::with_capacity(book_ids.len());
        for book_id in book_ids {
            books.push(self.require_book(book_id).await?);
        }

        let mut result = Vec::with_capacity(books.len());
        for mut book in books {
            if book.add_author(*author_id) {
                book = self.book_repo.update(&book).await?;
            }
            result.push(book);
        }

        if self.policy == ReplacePolicy::Exact {
            for mut book in self.book_repo.find_by_author(author_id).await? {
                if !book_ids.contains(&book.id) && book.remove_author(author_id) {
                    self.book_repo.update(&book).await?;
                }
            }
        }

        Ok(result)
    }

    /// Detaches the author from the book. Removing a non-associated pair
    /// is a no-op, not an error.
    pub async fn remove_book(&self, author_id: &Uuid, book_id: &Uuid) -> AppResult<()> {
        log_debug!("Removing book {} from author {}", book_id, author_id);

        self.require_author(author_id).await?;
        let mut book = self.require_book(book_id).await?;

        if book.remove_author(author_id) {
            self.book_repo.update(&book).await?;
            log_info!("Removed book {} from author {}", book_id, author_id);
        }

        Ok(())
    }

    async fn require_author(&self, author_id: &Uuid) -> AppResult<Author> {
        self.author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with ID {} not found", author_id)))
    }

    async fn require_book(&self, book_id: &Uuid) -> AppResult<Book> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))
    }
}
