use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a resident record. Records are never hard-deleted in
/// this layer; a resident who leaves is marked instead.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
pub enum ResidentStatus {
    #[default]
    Active,
    Dead,
    Missing,
    #[serde(rename = "Moved Out")]
    MovedOut,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Resident {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub civil_status: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub barangay: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub status: ResidentStatus,
    #[serde(default)]
    pub birthplace: Option<String>,
    #[serde(default)]
    pub educational_attainment: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub is_voter: bool,
    #[serde(default)]
    pub is_pwd: bool,
    #[serde(default)]
    pub is_senior: bool,
    #[serde(default)]
    pub is_solo: bool,
    #[serde(default)]
    pub avg_income: Option<f64>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateResidentRequest {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    #[serde(default)]
    pub civil_status: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub nationality: String,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub barangay: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub status: ResidentStatus,
    pub birthplace: Option<String>,
    pub educational_attainment: Option<String>,
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub is_voter: bool,
    #[serde(default)]
    pub is_pwd: bool,
    #[serde(default)]
    pub is_senior: bool,
    #[serde(default)]
    pub is_solo: bool,
    pub avg_income: Option<f64>,
    pub mobile_number: Option<String>,
}

/// Partial patch; only supplied fields are changed.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateResidentRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub civil_status: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub occupation: Option<String>,
    pub zone: Option<String>,
    pub barangay: Option<String>,
    pub town: Option<String>,
    pub province: Option<String>,
    pub status: Option<ResidentStatus>,
    pub birthplace: Option<String>,
    pub educational_attainment: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub is_voter: Option<bool>,
    pub is_pwd: Option<bool>,
    pub is_senior: Option<bool>,
    pub is_solo: Option<bool>,
    pub avg_income: Option<f64>,
    pub mobile_number: Option<String>,
}

impl Resident {
    /// Apply a partial patch in place.
    pub fn apply_patch(&mut self, patch: UpdateResidentRequest) {
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.middle_name {
            self.middle_name = Some(v);
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.suffix {
            self.suffix = Some(v);
        }
        if let Some(v) = patch.civil_status {
            self.civil_status = v;
        }
        if let Some(v) = patch.gender {
            self.gender = v;
        }
        if let Some(v) = patch.nationality {
            self.nationality = v;
        }
        if let Some(v) = patch.religion {
            self.religion = Some(v);
        }
        if let Some(v) = patch.occupation {
            self.occupation = Some(v);
        }
        if let Some(v) = patch.zone {
            self.zone = v;
        }
        if let Some(v) = patch.barangay {
            self.barangay = v;
        }
        if let Some(v) = patch.town {
            self.town = v;
        }
        if let Some(v) = patch.province {
            self.province = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.birthplace {
            self.birthplace = Some(v);
        }
        if let Some(v) = patch.educational_attainment {
            self.educational_attainment = Some(v);
        }
        if let Some(v) = patch.birthday {
            self.birthday = Some(v);
        }
        if let Some(v) = patch.is_voter {
            self.is_voter = v;
        }
        if let Some(v) = patch.is_pwd {
            self.is_pwd = v;
        }
        if let Some(v) = patch.is_senior {
            self.is_senior = v;
        }
        if let Some(v) = patch.is_solo {
            self.is_solo = v;
        }
        if let Some(v) = patch.avg_income {
            self.avg_income = Some(v);
        }
        if let Some(v) = patch.mobile_number {
            self.mobile_number = Some(v);
        }
    }
}
