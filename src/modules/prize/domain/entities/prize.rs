use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prize. `organization_id` is required once persisted and takes part
/// in the Organization<->Prize 1:1; `author_id` is optional and
/// authoritative for the Author<-Prize reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub premiation_date: Option<NaiveDate>,
    pub organization_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
}

impl Prize {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            premiation_date: None,
            organization_id: None,
            author_id: None,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_premiation_date(mut self, premiation_date: NaiveDate) -> Self {
        self.premiation_date = Some(premiation_date);
        self
    }

    pub fn with_organization(mut self, organization_id: Uuid) -> Self {
        self.organization_id = Some(organization_id);
        self
    }
}
