//! Birth registration certificate.
//!
//! Certifies that a birth is recorded in the barangay registry. The selected
//! resident is the informant; the child's particulars come from the form.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::documents::common::{
    escape_typst_markup, format_philippine_date, sanitize_filename,
};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_date, validate_required, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, purpose_line, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BirthRegistrationRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    pub registry_number: String,
    pub child_name: String,
    /// ISO date, validated before parsing.
    pub child_birthdate: String,
    pub child_birthplace: String,
    pub father_name: String,
    pub mother_name: String,
}

impl BirthRegistrationRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_required(&self.registry_number, "registry_number", "Registry number", &mut errors);
        validate_required(&self.child_name, "child_name", "Child's name", &mut errors);
        validate_date(&self.child_birthdate, "child_birthdate", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &BirthRegistrationRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (_, resolved) = req.common.subject(ctx)?;

    // validate() already checked the format
    let birthdate = NaiveDate::parse_from_str(req.child_birthdate.trim(), "%Y-%m-%d")
        .map_err(|e| DocumentError::Validation(e.to_string()))?;

    let certification = format!(
        "This is to certify that the birth of *{}*, born on *{}* at {}, child of *{}* and *{}*, is recorded in the registry of this office under Registry No. *{}*.",
        escape_typst_markup(&req.child_name.trim().to_uppercase()),
        escape_typst_markup(&format_philippine_date(birthdate)),
        escape_typst_markup(&or_blank(&req.child_birthplace)),
        escape_typst_markup(&or_blank(&req.father_name)),
        escape_typst_markup(&or_blank(&req.mother_name)),
        escape_typst_markup(req.registry_number.trim()),
    );
    let paragraphs = vec![
        certification,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::BirthRegistration,
        ctx,
        "CERTIFICATE OF BIRTH REGISTRATION",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&req.child_name, "child"),
    ))
}
