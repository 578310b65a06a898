use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::roles::HouseholdRole;

/// One (resident, role) association; order within the household is kept.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HouseholdMember {
    pub resident_id: i64,
    pub role: HouseholdRole,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct Household {
    pub id: i64,
    pub household_number: String,
    /// Owner / Renter / Other.
    #[serde(rename = "type")]
    pub household_type: String,
    /// Display name of the head, denormalized for listings.
    #[serde(default)]
    pub head: String,
    pub zone: String,
    pub date_of_residency: NaiveDate,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub members: Vec<HouseholdMember>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateHouseholdRequest {
    pub household_number: String,
    #[serde(rename = "type")]
    pub household_type: String,
    #[serde(default)]
    pub head: String,
    pub zone: String,
    pub date_of_residency: NaiveDate,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub members: Vec<HouseholdMember>,
}

/// Partial patch; a supplied member list replaces the whole list.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateHouseholdRequest {
    pub household_number: Option<String>,
    #[serde(rename = "type")]
    pub household_type: Option<String>,
    pub head: Option<String>,
    pub zone: Option<String>,
    pub date_of_residency: Option<NaiveDate>,
    pub status: Option<String>,
    pub members: Option<Vec<HouseholdMember>>,
}

/// Edit-time invariant: at most one member may hold the Head role.
pub fn validate_members(members: &[HouseholdMember]) -> Result<(), String> {
    let heads = members
        .iter()
        .filter(|m| m.role == HouseholdRole::Head)
        .count();
    if heads > 1 {
        return Err("A household may only have one Head".to_string());
    }
    Ok(())
}

impl Household {
    pub fn apply_patch(&mut self, patch: UpdateHouseholdRequest) {
        if let Some(v) = patch.household_number {
            self.household_number = v;
        }
        if let Some(v) = patch.household_type {
            self.household_type = v;
        }
        if let Some(v) = patch.head {
            self.head = v;
        }
        if let Some(v) = patch.zone {
            self.zone = v;
        }
        if let Some(v) = patch.date_of_residency {
            self.date_of_residency = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.members {
            self.members = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_head_is_valid() {
        let members = vec![
            HouseholdMember {
                resident_id: 1,
                role: HouseholdRole::Head,
            },
            HouseholdMember {
                resident_id: 2,
                role: HouseholdRole::Spouse,
            },
        ];
        assert!(validate_members(&members).is_ok());
    }

    #[test]
    fn test_two_heads_are_rejected() {
        let members = vec![
            HouseholdMember {
                resident_id: 1,
                role: HouseholdRole::Head,
            },
            HouseholdMember {
                resident_id: 2,
                role: HouseholdRole::Head,
            },
        ];
        assert!(validate_members(&members).is_err());
    }

    #[test]
    fn test_no_head_is_allowed() {
        let members = vec![HouseholdMember {
            resident_id: 1,
            role: HouseholdRole::Tenant,
        }];
        assert!(validate_members(&members).is_ok());
    }
}
