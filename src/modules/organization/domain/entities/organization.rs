use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::value_objects::organization_category::OrganizationCategory;

/// An awarding organization. Whether it currently holds a prize is
/// derived by querying prizes whose `organization_id` points here; the
/// 1:1 with Prize is enforced by the prize service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub category: OrganizationCategory,
}

impl Organization {
    pub fn new(name: String, category: OrganizationCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            category,
        }
    }
}
