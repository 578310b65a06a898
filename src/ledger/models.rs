//! Flat ledger record types.
//!
//! These are consumed for display, search and print only; the document core
//! never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Blotter {
    pub id: i64,
    #[serde(rename = "type")]
    pub blotter_type: String,
    pub reported_by: String,
    pub involved: String,
    pub incident_date: NaiveDate,
    pub location: String,
    pub zone: String,
    pub status: String,
    #[serde(default)]
    pub narrative: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub witnesses: String,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub hearing_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Income {
    pub id: i64,
    pub category: String,
    #[serde(rename = "type")]
    pub income_type: String,
    pub amount: f64,
    pub or_number: String,
    pub received_from: String,
    pub received_by: String,
    pub date_received: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Expense {
    pub id: i64,
    pub category: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub amount: f64,
    pub or_number: String,
    pub paid_to: String,
    pub paid_by: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub venue: String,
    pub audience: String,
    #[serde(default)]
    pub notes: String,
    pub status: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Youth {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub gender: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub educational_background: Option<String>,
    #[serde(default)]
    pub work_status: Option<String>,
    #[serde(default)]
    pub in_school_youth: bool,
    #[serde(default)]
    pub out_of_school_youth: bool,
    #[serde(default)]
    pub working_youth: bool,
    #[serde(default)]
    pub is_sk_voter: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct GovDoc {
    pub id: i64,
    pub title: String,
    /// Executive Order / Resolution / Ordinance.
    #[serde(rename = "type")]
    pub doc_type: String,
    pub date_issued: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ProgramProject {
    pub id: i64,
    pub name: String,
    /// Program or Project.
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub project_manager: String,
    #[serde(default)]
    pub beneficiaries: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub source_of_funds: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LogbookEntry {
    pub id: i64,
    pub official_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_in_am: Option<String>,
    #[serde(default)]
    pub time_out_am: Option<String>,
    #[serde(default)]
    pub time_in_pm: Option<String>,
    #[serde(default)]
    pub time_out_pm: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_hours: Option<f64>,
}

impl Youth {
    /// Comma-separated classification line, "N/A" when no flag is set.
    pub fn classifications(&self) -> String {
        let mut parts = Vec::new();
        if self.in_school_youth {
            parts.push("In School");
        }
        if self.out_of_school_youth {
            parts.push("Out of School");
        }
        if self.working_youth {
            parts.push("Working");
        }
        if parts.is_empty() {
            "N/A".to_string()
        } else {
            parts.join(", ")
        }
    }
}
