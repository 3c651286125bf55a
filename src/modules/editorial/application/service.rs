use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::editorial::Editorial, repositories::editorial_repository::EditorialRepository,
};
use crate::modules::book::BookRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

pub struct EditorialService {
    editorial_repo: Arc<dyn EditorialRepository>,
    book_repo: Arc<dyn BookRepository>,
}

impl EditorialService {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepository>,
        book_repo: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            editorial_repo,
            book_repo,
        }
    }

    pub async fn create_editorial(&self, editorial: Editorial) -> AppResult<Editorial> {
        log_debug!("Creating editorial '{}'", editorial.name);

        if self
            .editorial_repo
            .find_by_name(&editorial.name)
            .await?
            .is_some()
        {
            return Err(AppError::IllegalOperation(
                "Editorial name already exists".to_string(),
            ));
        }

        let saved = self.editorial_repo.save(&editorial).await?;

        log_info!("Created editorial {} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_editorials(&self) -> AppResult<Vec<Editorial>> {
        self.editorial_repo.get_all().await
    }

    pub async fn get_editorial(&self, id: &Uuid) -> AppResult<Editorial> {
        self.editorial_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Editorial with ID {} not found", id)))
    }

    pub async fn update_editorial(
        &self,
        id: &Uuid,
        mut editorial: Editorial,
    ) -> AppResult<Editorial> {
        self.get_editorial(id).await?;

        // The path id wins over whatever the payload carries
        editorial.id = *id;
        self.editorial_repo.update(&editorial).await
    }

    /// Deletion is all-or-nothing: an editorial that still publishes
    /// books stays untouched.
    pub async fn delete_editorial(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting editorial {}", id);

        self.get_editorial(id).await?;

        let books = self.book_repo.find_by_editorial(id).await?;
        if !books.is_empty() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete editorial {} because it has associated books",
                id
            )));
        }

        self.editorial_repo.delete(id).await?;

        log_info!("Deleted editorial {}", id);
        Ok(())
    }
}
