//! Document field resolver.
//!
//! Every certificate template needs the same derived values: the assembled
//! full name, the age as of today, civil-status defaults, the one-year
//! expiry window, and signatory defaults resolved from the official roster.
//! These live here once; templates only apply user overrides on top.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

use crate::official::models::Official;
use crate::resident::models::Resident;

/// Fixed purpose choices offered on certificate forms.
pub const PURPOSE_OPTIONS: [&str; 4] = [
    "Scholarship",
    "Employment",
    "Financial Assistance",
    "Identification",
];

/// Sentinel value that reveals the free-text purpose field.
pub const CUSTOM_PURPOSE: &str = "custom";

/// Blank-line placeholder substituted for missing values on the printed page.
pub const BLANK_LINE: &str = "________________";

/// Assemble `First [M.] Last [Suffix]`.
///
/// Only the first character of the middle name is used, followed by a
/// period. Whitespace runs collapse to a single space and the ends are
/// trimmed, so absent parts never leave double spaces behind.
pub fn assemble_full_name(
    first: &str,
    middle: Option<&str>,
    last: &str,
    suffix: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    parts.push(first.to_string());
    if let Some(initial) = middle.and_then(|m| m.trim().chars().next()) {
        parts.push(format!("{initial}."));
    }
    parts.push(last.to_string());
    if let Some(suffix) = suffix {
        parts.push(suffix.to_string());
    }
    parts
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full name of a resident record.
pub fn resident_full_name(resident: &Resident) -> String {
    assemble_full_name(
        &resident.first_name,
        resident.middle_name.as_deref(),
        &resident.last_name,
        resident.suffix.as_deref(),
    )
}

/// Age in whole years as of `today`, using the has-birthday-occurred rule.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

/// Age today; `None` when the birthdate is unknown so the user may hand-fill.
pub fn age(birthdate: Option<NaiveDate>) -> Option<i32> {
    birthdate.map(|b| age_on(b, Local::now().date_naive()))
}

/// Certificates expire exactly one calendar year after issuance (same
/// month/day, year + 1; February 29 falls back to February 28).
pub fn expiry_date(issued: NaiveDate) -> NaiveDate {
    issued.with_year(issued.year() + 1).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(issued.year() + 1, 2, 28)
            .unwrap_or(issued)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStatus {
    Active,
    Expired,
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Derived status, recomputed on every render and never stored.
pub fn certificate_status(issued: NaiveDate, today: NaiveDate) -> CertificateStatus {
    if today > expiry_date(issued) {
        CertificateStatus::Expired
    } else {
        CertificateStatus::Active
    }
}

/// First official whose role and section both case-insensitively contain the
/// requested substrings. An empty roster yields `None`; the result is only a
/// default and stays user-overridable.
pub fn resolve_official<'a>(
    officials: &'a [Official],
    role: &str,
    section: &str,
) -> Option<&'a Official> {
    let role = role.to_lowercase();
    let section = section.to_lowercase();
    officials.iter().find(|o| {
        o.role.to_lowercase().contains(&role) && o.section.to_lowercase().contains(&section)
    })
}

/// The barangay captain, the default "certified by" signatory.
pub fn resolve_captain(officials: &[Official]) -> Option<&Official> {
    resolve_official(officials, "barangay captain", "barangay officials")
}

/// Substitute the free-text purpose when the custom sentinel is selected; a
/// missing value becomes the blank-line placeholder.
pub fn resolve_purpose(selected: &str, custom: Option<&str>) -> String {
    let resolved = if selected == CUSTOM_PURPOSE {
        custom.unwrap_or_default()
    } else {
        selected
    };
    if resolved.trim().is_empty() {
        BLANK_LINE.to_string()
    } else {
        resolved.trim().to_string()
    }
}

/// Fields every certificate derives from the selected resident. Overrides
/// from the form always win over these defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedResident {
    pub full_name: String,
    pub age: Option<i32>,
    pub civil_status: String,
}

pub fn resolve_resident(resident: &Resident, today: NaiveDate) -> ResolvedResident {
    ResolvedResident {
        full_name: resident_full_name(resident),
        age: resident.birthday.map(|b| age_on(b, today)),
        civil_status: resident.civil_status.clone(),
    }
}

impl ResolvedResident {
    /// Apply user overrides; `None` keeps the derived default.
    pub fn with_overrides(mut self, age: Option<i32>, civil_status: Option<&str>) -> Self {
        if age.is_some() {
            self.age = age;
        }
        if let Some(cs) = civil_status {
            if !cs.trim().is_empty() {
                self.civil_status = cs.trim().to_string();
            }
        }
        self
    }

    /// Printable age, blank placeholder when unknown.
    pub fn age_text(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| "___".to_string())
    }

    /// Printable civil status, blank placeholder when unknown.
    pub fn civil_status_text(&self) -> String {
        if self.civil_status.trim().is_empty() {
            "___".to_string()
        } else {
            self.civil_status.clone()
        }
    }
}
