use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{entities::book::Book, repositories::book_repository::BookRepository};
use crate::modules::editorial::EditorialRepository;
use crate::modules::review::ReviewRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
    editorial_repo: Arc<dyn EditorialRepository>,
    review_repo: Arc<dyn ReviewRepository>,
}

impl BookService {
    pub fn new(
        book_repo: Arc<dyn BookRepository>,
        editorial_repo: Arc<dyn EditorialRepository>,
        review_repo: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            book_repo,
            editorial_repo,
            review_repo,
        }
    }

    /// A book is never persisted without a resolvable editorial and a
    /// well-formed, unused ISBN.
    pub async fn create_book(&self, book: Book) -> AppResult<Book> {
        log_debug!("Creating book '{}' (ISBN {})", book.name, book.isbn);

        let editorial_id = book
            .editorial_id
            .ok_or_else(|| AppError::IllegalOperation("Editorial is not valid".to_string()))?;
        if self
            .editorial_repo
            .find_by_id(&editorial_id)
            .await?
            .is_none()
        {
            return Err(AppError::IllegalOperation(
                "Editorial is not valid".to_string(),
            ));
        }

        Validator::validate_isbn(&book.isbn)?;

        if !self.book_repo.find_by_isbn(&book.isbn).await?.is_empty() {
            return Err(AppError::IllegalOperation("ISBN already exists".to_string()));
        }

        let saved = self.book_repo.save(&book).await?;

        log_info!("Created book {} (ISBN {})", saved.id, saved.isbn);
        Ok(saved)
    }

    pub async fn get_books(&self) -> AppResult<Vec<Book>> {
        self.book_repo.get_all().await
    }

    pub async fn get_book(&self, id: &Uuid) -> AppResult<Book> {
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))
    }

    /// Re-validates the ISBN format but not its uniqueness: a book may
    /// keep its own ISBN across updates.
    pub async fn update_book(&self, id: &Uuid, mut book: Book) -> AppResult<Book> {
        self.get_book(id).await?;

        Validator::validate_isbn(&book.isbn)?;

        // The path id wins over whatever the payload carries
        book.id = *id;
        self.book_repo.update(&book).await
    }

    /// Deletion is all-or-nothing: a book with attached authors stays
    /// untouched. A deletable book takes its reviews with it.
    pub async fn delete_book(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting book {}", id);

        let book = self.get_book(id).await?;

        if !book.author_ids.is_empty() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete book {} because it has associated authors",
                id
            )));
        }

        self.review_repo.delete_by_book(id).await?;
        self.book_repo.delete(id).await?;

        log_info!("Deleted book {}", id);
        Ok(())
    }
}
