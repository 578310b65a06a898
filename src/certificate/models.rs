use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::documents::resolver::{certificate_status, expiry_date};

/// A persisted certificate record.
///
/// Constructed client-side from form state plus computed defaults and saved
/// once the user confirms generation; immutable afterwards in this layer.
/// Expiry and status are derived at read time, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub resident_id: i64,
    pub resident_name: String,
    /// Human-readable type label, e.g. "Residency Certificate".
    pub certificate_type: String,
    pub issued_date: NaiveDate,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub civil_status: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    // Type-specific payload fields; absent for certificate types that do not
    // use them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<u32>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCertificateRequest {
    pub resident_id: i64,
    pub resident_name: String,
    pub certificate_type: String,
    pub issued_date: NaiveDate,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub civil_status: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub ownership_text: Option<String>,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub child_count: Option<u32>,
}

/// Listing view with the derived expiry and active/expired status.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct CertificateView {
    #[serde(flatten)]
    pub record: Certificate,
    pub expires_on: NaiveDate,
    pub status: String,
}

impl CertificateView {
    pub fn from_record(record: Certificate, today: NaiveDate) -> Self {
        let expires_on = expiry_date(record.issued_date);
        let status = certificate_status(record.issued_date, today).to_string();
        Self {
            record,
            expires_on,
            status,
        }
    }
}
