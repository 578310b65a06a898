use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Jurisdiction identity shared by every document header.
///
/// The two seal images are base64 PNG payloads. All fields are optional on
/// the wire; renderers substitute literal fallback text when settings have
/// not been configured yet.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct Settings {
    #[serde(default)]
    pub barangay: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    /// Barangay seal, base64-encoded PNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barangay_seal: Option<String>,
    /// Municipality seal, base64-encoded PNG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipal_seal: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateSettingsRequest {
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub barangay_seal: Option<String>,
    pub municipal_seal: Option<String>,
}
