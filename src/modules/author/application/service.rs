use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::author::Author, repositories::author_repository::AuthorRepository,
};
use crate::modules::book::BookRepository;
use crate::modules::prize::PrizeRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct AuthorService {
    author_repo: Arc<dyn AuthorRepository>,
    book_repo: Arc<dyn BookRepository>,
    prize_repo: Arc<dyn PrizeRepository>,
}

impl AuthorService {
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        book_repo: Arc<dyn BookRepository>,
        prize_repo: Arc<dyn PrizeRepository>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
            prize_repo,
        }
    }

    pub async fn create_author(&self, author: Author) -> AppResult<Author> {
        log_debug!("Creating author '{}'", author.name);

        Validator::validate_birth_date(author.birth_date)?;

        let saved = self.author_repo.save(&author).await?;

        log_info!("Created author {} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_authors(&self) -> AppResult<Vec<Author>> {
        self.author_repo.get_all().await
    }

    pub async fn get_author(&self, id: &Uuid) -> AppResult<Author> {
        self.author_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with ID {} not found", id)))
    }

    pub async fn update_author(&self, id: &Uuid, mut author: Author) -> AppResult<Author> {
        self.get_author(id).await?;

        // The path id wins over whatever the payload carries
        author.id = *id;
        self.author_repo.update(&author).await
    }

    /// Deletion is all-or-nothing: an author that still has books or
    /// prizes attached stays untouched.
    pub async fn delete_author(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting author {}", id);

        self.get_author(id).await?;

        let books = self.book_repo.find_by_author(id).await?;
        if !books.is_empty() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete author {} because it has associated books",
                id
            )));
        }

        let prizes = self.prize_repo.find_by_author(id).await?;
        if !prizes.is_empty() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete author {} because it has associated prizes",
                id
            )));
        }

        self.author_repo.delete(id).await?;

        log_info!("Deleted author {}", id);
        Ok(())
    }
}
