use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{entities::book::Book, repositories::book_repository::BookRepository};
use crate::modules::editorial::EditorialRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Book-side view of the Book->Editorial many-to-one reference.
pub struct BookEditorialService {
    book_repo: Arc<dyn BookRepository>,
    editorial_repo: Arc<dyn EditorialRepository>,
}

impl BookEditorialService {
    pub fn new(
        book_repo: Arc<dyn BookRepository>,
        editorial_repo: Arc<dyn EditorialRepository>,
    ) -> Self {
        Self {
            book_repo,
            editorial_repo,
        }
    }

    /// Unconditionally overwrites the book's editorial; after this call
    /// the book has exactly one current editorial.
    pub async fn replace_editorial(&self, book_id: &Uuid, editorial_id: &Uuid) -> AppResult<Book> {
        log_debug!("Replacing editorial of book {} with {}", book_id, editorial_id);

        let mut book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))?;

        if self
            .editorial_repo
            .find_by_id(editorial_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Editorial with ID {} not found",
                editorial_id
            )));
        }

        book.editorial_id = Some(*editorial_id);
        let updated = self.book_repo.update(&book).await?;

        log_info!("Replaced editorial of book {} with {}", book_id, editorial_id);
        Ok(updated)
    }

    /// Clears the book's editorial. The editorial's book list is derived
    /// by query, so the detach is complete with this single write.
    pub async fn remove_editorial(&self, book_id: &Uuid) -> AppResult<()> {
        log_debug!("Removing editorial from book {}", book_id);

        let mut book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", book_id)))?;

        book.editorial_id = None;
        self.book_repo.update(&book).await?;

        log_info!("Removed editorial from book {}", book_id);
        Ok(())
    }
}
