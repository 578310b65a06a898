//! Fixed kinship vocabulary for household membership.
//!
//! The set is closed: adding a role means adding a variant here plus its
//! definition and display icon. Serialized names match the human-readable
//! labels used on the forms.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum HouseholdRole {
    Head,
    #[serde(rename = "Adopted Daughter")]
    AdoptedDaughter,
    #[serde(rename = "Adopted Son")]
    AdoptedSon,
    Auntie,
    Brother,
    #[serde(rename = "Brother in law")]
    BrotherInLaw,
    Cousin,
    Daughter,
    #[serde(rename = "Daughter in law")]
    DaughterInLaw,
    Father,
    #[serde(rename = "Father in law")]
    FatherInLaw,
    Friend,
    Granddaughter,
    #[serde(rename = "Granddaughter in law")]
    GranddaughterInLaw,
    Grandfather,
    Grandmother,
    Grandson,
    #[serde(rename = "Grandson in law")]
    GrandsonInLaw,
    #[serde(rename = "House maid/helper")]
    HouseMaidHelper,
    Mother,
    #[serde(rename = "Mother in law")]
    MotherInLaw,
    Nephew,
    Niece,
    Partner,
    Sister,
    Son,
    #[serde(rename = "Son in law")]
    SonInLaw,
    Spouse,
    Stepbrother,
    Stepdaughter,
    #[serde(rename = "Stepdaughter in law")]
    StepdaughterInLaw,
    Stepfather,
    Stepmother,
    Stepgranddaughter,
    #[serde(rename = "Stepgranddaughter in law")]
    StepgranddaughterInLaw,
    Stepgrandson,
    #[serde(rename = "Stepgrandson in law")]
    StepgrandsonInLaw,
    Stepsister,
    Stepson,
    #[serde(rename = "Stepson in law")]
    StepsonInLaw,
    Tenant,
    Uncle,
    Others,
}

impl HouseholdRole {
    pub const ALL: [HouseholdRole; 43] = [
        HouseholdRole::Head,
        HouseholdRole::AdoptedDaughter,
        HouseholdRole::AdoptedSon,
        HouseholdRole::Auntie,
        HouseholdRole::Brother,
        HouseholdRole::BrotherInLaw,
        HouseholdRole::Cousin,
        HouseholdRole::Daughter,
        HouseholdRole::DaughterInLaw,
        HouseholdRole::Father,
        HouseholdRole::FatherInLaw,
        HouseholdRole::Friend,
        HouseholdRole::Granddaughter,
        HouseholdRole::GranddaughterInLaw,
        HouseholdRole::Grandfather,
        HouseholdRole::Grandmother,
        HouseholdRole::Grandson,
        HouseholdRole::GrandsonInLaw,
        HouseholdRole::HouseMaidHelper,
        HouseholdRole::Mother,
        HouseholdRole::MotherInLaw,
        HouseholdRole::Nephew,
        HouseholdRole::Niece,
        HouseholdRole::Partner,
        HouseholdRole::Sister,
        HouseholdRole::Son,
        HouseholdRole::SonInLaw,
        HouseholdRole::Spouse,
        HouseholdRole::Stepbrother,
        HouseholdRole::Stepdaughter,
        HouseholdRole::StepdaughterInLaw,
        HouseholdRole::Stepfather,
        HouseholdRole::Stepmother,
        HouseholdRole::Stepgranddaughter,
        HouseholdRole::StepgranddaughterInLaw,
        HouseholdRole::Stepgrandson,
        HouseholdRole::StepgrandsonInLaw,
        HouseholdRole::Stepsister,
        HouseholdRole::Stepson,
        HouseholdRole::StepsonInLaw,
        HouseholdRole::Tenant,
        HouseholdRole::Uncle,
        HouseholdRole::Others,
    ];

    /// Human-readable label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::AdoptedDaughter => "Adopted Daughter",
            Self::AdoptedSon => "Adopted Son",
            Self::Auntie => "Auntie",
            Self::Brother => "Brother",
            Self::BrotherInLaw => "Brother in law",
            Self::Cousin => "Cousin",
            Self::Daughter => "Daughter",
            Self::DaughterInLaw => "Daughter in law",
            Self::Father => "Father",
            Self::FatherInLaw => "Father in law",
            Self::Friend => "Friend",
            Self::Granddaughter => "Granddaughter",
            Self::GranddaughterInLaw => "Granddaughter in law",
            Self::Grandfather => "Grandfather",
            Self::Grandmother => "Grandmother",
            Self::Grandson => "Grandson",
            Self::GrandsonInLaw => "Grandson in law",
            Self::HouseMaidHelper => "House maid/helper",
            Self::Mother => "Mother",
            Self::MotherInLaw => "Mother in law",
            Self::Nephew => "Nephew",
            Self::Niece => "Niece",
            Self::Partner => "Partner",
            Self::Sister => "Sister",
            Self::Son => "Son",
            Self::SonInLaw => "Son in law",
            Self::Spouse => "Spouse",
            Self::Stepbrother => "Stepbrother",
            Self::Stepdaughter => "Stepdaughter",
            Self::StepdaughterInLaw => "Stepdaughter in law",
            Self::Stepfather => "Stepfather",
            Self::Stepmother => "Stepmother",
            Self::Stepgranddaughter => "Stepgranddaughter",
            Self::StepgranddaughterInLaw => "Stepgranddaughter in law",
            Self::Stepgrandson => "Stepgrandson",
            Self::StepgrandsonInLaw => "Stepgrandson in law",
            Self::Stepsister => "Stepsister",
            Self::Stepson => "Stepson",
            Self::StepsonInLaw => "Stepson in law",
            Self::Tenant => "Tenant",
            Self::Uncle => "Uncle",
            Self::Others => "Others",
        }
    }

    /// Short definition shown as help text on the membership form.
    pub fn definition(self) -> &'static str {
        match self {
            Self::Head => {
                "Primary household member responsible for major decisions and household management"
            }
            Self::AdoptedDaughter => "Female child who has been legally adopted into the family",
            Self::AdoptedSon => "Male child who has been legally adopted into the family",
            Self::Auntie => "Sister of a parent",
            Self::Brother => "Male sibling of the household head or spouse",
            Self::BrotherInLaw => "Husband of a sister, or brother of a spouse",
            Self::Cousin => "Child of an aunt or uncle",
            Self::Daughter => "Female offspring of the household head or spouse",
            Self::DaughterInLaw => "Wife of a son",
            Self::Father => "Male parent of the household head or spouse",
            Self::FatherInLaw => "Father of a spouse",
            Self::Friend => "Non-relative living with the household by mutual arrangement",
            Self::Granddaughter => "Daughter of a son or daughter",
            Self::GranddaughterInLaw => "Wife of a grandson",
            Self::Grandfather => "Father of a parent",
            Self::Grandmother => "Mother of a parent",
            Self::Grandson => "Son of a son or daughter",
            Self::GrandsonInLaw => "Husband of a granddaughter",
            Self::HouseMaidHelper => "Domestic worker residing with the household",
            Self::Mother => "Female parent of the household head or spouse",
            Self::MotherInLaw => "Mother of a spouse",
            Self::Nephew => "Son of a sibling",
            Self::Niece => "Daughter of a sibling",
            Self::Partner => "Unmarried partner of the household head",
            Self::Sister => "Female sibling of the household head or spouse",
            Self::Son => "Male offspring of the household head or spouse",
            Self::SonInLaw => "Husband of a daughter",
            Self::Spouse => "Legally married partner of the household head",
            Self::Stepbrother => "Son of a stepparent from a previous relationship",
            Self::Stepdaughter => "Daughter of a spouse from a previous relationship",
            Self::StepdaughterInLaw => "Wife of a stepson",
            Self::Stepfather => "Husband of a parent who is not the biological father",
            Self::Stepmother => "Wife of a parent who is not the biological mother",
            Self::Stepgranddaughter => "Granddaughter through a stepchild",
            Self::StepgranddaughterInLaw => "Wife of a stepgrandson",
            Self::Stepgrandson => "Grandson through a stepchild",
            Self::StepgrandsonInLaw => "Husband of a stepgranddaughter",
            Self::Stepsister => "Daughter of a stepparent from a previous relationship",
            Self::Stepson => "Son of a spouse from a previous relationship",
            Self::StepsonInLaw => "Husband of a stepdaughter",
            Self::Tenant => "Non-relative renting space within the household",
            Self::Uncle => "Brother of a parent",
            Self::Others => "Relationship not covered by the other categories",
        }
    }

    /// Display icon name used by the membership form.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Head => "crown",
            Self::Spouse | Self::Partner => "heart",
            Self::Son | Self::Daughter | Self::AdoptedSon | Self::AdoptedDaughter => "baby",
            Self::Father | Self::Mother | Self::Stepfather | Self::Stepmother => "user-check",
            Self::Grandfather | Self::Grandmother => "user-plus",
            Self::Grandson
            | Self::Granddaughter
            | Self::Stepgrandson
            | Self::Stepgranddaughter => "baby",
            Self::Brother | Self::Sister | Self::Stepbrother | Self::Stepsister => "users",
            Self::Stepson | Self::Stepdaughter => "baby",
            Self::SonInLaw
            | Self::DaughterInLaw
            | Self::BrotherInLaw
            | Self::FatherInLaw
            | Self::MotherInLaw
            | Self::GrandsonInLaw
            | Self::GranddaughterInLaw
            | Self::StepsonInLaw
            | Self::StepdaughterInLaw
            | Self::StepgrandsonInLaw
            | Self::StepgranddaughterInLaw => "users",
            Self::Auntie | Self::Uncle | Self::Cousin | Self::Nephew | Self::Niece => "users",
            Self::Friend | Self::Tenant | Self::HouseMaidHelper | Self::Others => "user",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_closed_and_complete() {
        assert_eq!(HouseholdRole::ALL.len(), 43);
        for role in HouseholdRole::ALL {
            assert!(!role.definition().is_empty());
            assert!(!role.icon().is_empty());
        }
    }

    #[test]
    fn test_multiword_labels_round_trip() {
        let json = serde_json::to_string(&HouseholdRole::HouseMaidHelper).unwrap();
        assert_eq!(json, "\"House maid/helper\"");
        let back: HouseholdRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HouseholdRole::HouseMaidHelper);
    }
}
