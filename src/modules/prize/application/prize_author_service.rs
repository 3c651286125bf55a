use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{entities::prize::Prize, repositories::prize_repository::PrizeRepository};
use crate::modules::author::{Author, AuthorRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// Prize-side view of the optional Prize->Author reference. The author's
/// prize list is derived by query, so attaching and detaching are single
/// writes through the prize.
pub struct PrizeAuthorService {
    prize_repo: Arc<dyn PrizeRepository>,
    author_repo: Arc<dyn AuthorRepository>,
}

impl PrizeAuthorService {
    pub fn new(prize_repo: Arc<dyn PrizeRepository>, author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self {
            prize_repo,
            author_repo,
        }
    }

    pub async fn add_author(&self, author_id: &Uuid, prize_id: &Uuid) -> AppResult<Author> {
        log_debug!("Associating author {} to prize {}", author_id, prize_id);

        let author = self.require_author(author_id).await?;
        let mut prize = self.require_prize(prize_id).await?;

        prize.author_id = Some(author.id);
        self.prize_repo.update(&prize).await?;

        log_info!("Associated author {} to prize {}", author_id, prize_id);
        Ok(author)
    }

    /// NotFound both when the prize id is dangling and when the prize has
    /// no author set.
    pub async fn get_author(&self, prize_id: &Uuid) -> AppResult<Author> {
        let prize = self.require_prize(prize_id).await?;

        let author_id = prize.author_id.ok_or_else(|| {
            AppError::NotFound("The prize has no associated author".to_string())
        })?;

        self.require_author(&author_id).await
    }

    /// Unconditionally overwrites the prize's author.
    pub async fn replace_author(&self, prize_id: &Uuid, author_id: &Uuid) -> AppResult<Author> {
        log_debug!("Replacing author of prize {} with {}", prize_id, author_id);

        let author = self.require_author(author_id).await?;
        let mut prize = self.require_prize(prize_id).await?;

        prize.author_id = Some(author.id);
        self.prize_repo.update(&prize).await?;

        log_info!("Replaced author of prize {} with {}", prize_id, author_id);
        Ok(author)
    }

    /// Clears the prize's author; NotFound when there is none to clear.
    pub async fn remove_author(&self, prize_id: &Uuid) -> AppResult<()> {
        log_debug!("Removing author from prize {}", prize_id);

        let mut prize = self.require_prize(prize_id).await?;

        if prize.author_id.is_none() {
            return Err(AppError::NotFound(
                "The prize has no associated author".to_string(),
            ));
        }

        prize.author_id = None;
        self.prize_repo.update(&prize).await?;

        log_info!("Removed author from prize {}", prize_id);
        Ok(())
    }

    async fn require_prize(&self, prize_id: &Uuid) -> AppResult<Prize> {
        self.prize_repo
            .find_by_id(prize_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Prize with ID {} not found", prize_id)))
    }

    async fn require_author(&self, author_id: &Uuid) -> AppResult<Author> {
        self.author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with ID {} not found", author_id)))
    }
}
