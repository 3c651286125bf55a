use serde::{Deserialize, Serialize};

/// Kind of organization behind a prize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganizationCategory {
    Private,
    Public,
    Foundation,
}
