use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::organization::Organization,
    repositories::organization_repository::OrganizationRepository,
};
use crate::modules::prize::PrizeRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

pub struct OrganizationService {
    organization_repo: Arc<dyn OrganizationRepository>,
    prize_repo: Arc<dyn PrizeRepository>,
}

impl OrganizationService {
    pub fn new(
        organization_repo: Arc<dyn OrganizationRepository>,
        prize_repo: Arc<dyn PrizeRepository>,
    ) -> Self {
        Self {
            organization_repo,
            prize_repo,
        }
    }

    pub async fn create_organization(&self, organization: Organization) -> AppResult<Organization> {
        log_debug!("Creating organization '{}'", organization.name);

        if self
            .organization_repo
            .find_by_name(&organization.name)
            .await?
            .is_some()
        {
            return Err(AppError::IllegalOperation(
                "Organization name already exists".to_string(),
            ));
        }

        let saved = self.organization_repo.save(&organization).await?;

        log_info!("Created organization {} ('{}')", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_organizations(&self) -> AppResult<Vec<Organization>> {
        self.organization_repo.get_all().await
    }

    pub async fn get_organization(&self, id: &Uuid) -> AppResult<Organization> {
        self.organization_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Organization with ID {} not found", id)))
    }

    pub async fn update_organization(
        &self,
        id: &Uuid,
        mut organization: Organization,
    ) -> AppResult<Organization> {
        self.get_organization(id).await?;

        // The path id wins over whatever the payload carries
        organization.id = *id;
        self.organization_repo.update(&organization).await
    }

    /// Deletion is all-or-nothing: an organization that holds a prize
    /// stays untouched.
    pub async fn delete_organization(&self, id: &Uuid) -> AppResult<()> {
        log_debug!("Deleting organization {}", id);

        self.get_organization(id).await?;

        if self.prize_repo.find_by_organization(id).await?.is_some() {
            return Err(AppError::IllegalOperation(format!(
                "Unable to delete organization {} because it has an associated prize",
                id
            )));
        }

        self.organization_repo.delete(id).await?;

        log_info!("Deleted organization {}", id);
        Ok(())
    }
}
