use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A barangay officer. Signatory defaults ("the captain", "the secretary")
/// are resolved by case-insensitive substring match on role and section.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Official {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub section: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub term_start: Option<NaiveDate>,
    #[serde(default)]
    pub term_end: Option<NaiveDate>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateOfficialRequest {
    pub name: String,
    pub role: String,
    pub section: String,
    pub contact: Option<String>,
    pub zone: Option<String>,
    pub term_start: Option<NaiveDate>,
    pub term_end: Option<NaiveDate>,
}
