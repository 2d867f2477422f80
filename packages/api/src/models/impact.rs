//! Delete-impact projection returned by the `delete-impact` endpoints.

use serde::{Deserialize, Serialize};

/// What deleting an item or user would cascade into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteImpact {
    pub can_delete: bool,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub impact: ImpactCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactCounts {
    #[serde(default)]
    pub ratings_count: u64,
    #[serde(default)]
    pub users_affected: u64,
    #[serde(default)]
    pub sharings_count: u64,
    #[serde(default)]
    pub affected_users: Vec<AffectedUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffectedUser {
    pub id: u64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub ratings_count: u64,
}

impl AffectedUser {
    /// e.g. "1 rating will be lost", "3 ratings will be lost".
    pub fn ratings_label(&self) -> String {
        let noun = if self.ratings_count == 1 { "rating" } else { "ratings" };
        format!("{} {noun} will be lost", self.ratings_count)
    }
}
