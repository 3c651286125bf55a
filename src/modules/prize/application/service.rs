use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{entities::prize::Prize, repositories::prize_repository::PrizeRepository};
use crate::modules::organization::OrganizationRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

pub struct PrizeService {
    prize_repo: Arc<dyn PrizeRepository>,
    organization_repo: Arc<dyn OrganizationRepository>,
}

impl PrizeService {
    pub fn new(
        prize_repo: Arc<dyn PrizeRepository>,
        organization_repo: Arc<dyn OrganizationRepository>,
    ) -> Self {
        Self {
            prize_repo,
            organization_repo,
        }
    }

    /// A prize is never persisted without a resolvable organization, and
    /// an organization holds at most one prize.
    pub async fn create_prize(&self, prize: Prize) -> AppResult<Prize> {
        log_debug!("Creating prize '{}'", prize.name);

        self.validate_organization(&prize, None).await?;

        let saved = self.prize_repo.save(&prize).await?;

        log_info!("Created prize {} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_prizes(&self) -> AppResult<Vec<Prize>> {
        self.prize_repo.get_all().await
    }

    pub async fn get_prize(&self, id: &Uuid) -> AppResult<Prize> {
        self.prize_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Prize with ID {} not found", id)))
    }

    /// The Organization<->Prize 1:1 is re-checked on replacement: the
    /// prize may keep its own organization but cannot move onto one that
    /// already holds a different prize.
    pub async fn update_prize(&self, id: &Uuid, mut prize: Prize) -> AppResult<Prize> {
        self.get_prize(id).await?;

        self.validate_organization(&prize, Some(id)).await?;

        // The path id wins over whatever the payload carries
        prize.id = *id;
        self.prize_repo.update(&prize).await
    }

    /// Deletion is all-or-nothing: a prize with an associated author
    /// stays untouched.
    pub async fn delete_prize(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting prize {}", id);

        let prize = self.get_prize(id).await?;

        if prize.author_id.is_some() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete prize {} because it has an associated author",
                id
            )));
        }

        self.prize_repo.delete(id).await?;

        log_info!("Deleted prize {}", id);
        Ok(())
    }

    async fn validate_organization(&self, prize: &Prize, prize_id: Option<&Uuid>) -> AppResult<()> {
        let organization_id = prize
            .organization_id
            .ok_or_else(|| AppError::IllegalOperation("Organization is not valid".to_string()))?;

        if self
            .organization_repo
            .find_by_id(&organization_id)
            .await?
            .is_none()
        {
            return Err(AppError::IllegalOperation(
                "Organization is not valid".to_string(),
            ));
        }

        if let Some(holder) = self.prize_repo.find_by_organization(&organization_id).await? {
            // The prize keeping its own organization is fine
            if prize_id.map_or(true, |id| holder.id != *id) {
                return Err(AppError::IllegalOperation(
                    "Organization already holds a prize".to_string(),
                ));
            }
        }

        Ok(())
    }
}
