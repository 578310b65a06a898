//! Marriage certification.
//!
//! The only template that resolves two residents. Per-party age and
//! civil-status overrides apply independently.

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::documents::common::{
    escape_typst_markup, format_philippine_date, sanitize_filename,
};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::resolver;
use crate::documents::validation::{
    validate_amount, validate_date, ValidationError, ValidationErrors,
};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, FooterFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MarriageRequest {
    pub groom_resident_id: i64,
    pub bride_resident_id: i64,
    pub groom_age: Option<i32>,
    pub bride_age: Option<i32>,
    pub groom_civil_status: Option<String>,
    pub bride_civil_status: Option<String>,
    /// ISO date of the marriage.
    pub marriage_date: String,
    pub marriage_place: String,
    pub amount: String,
    pub assigned_official: Option<String>,
    pub prepared_by: Option<String>,
}

impl MarriageRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        if self.groom_resident_id <= 0 {
            errors.add(ValidationError::empty_field("groom_resident_id", "Groom"));
        }
        if self.bride_resident_id <= 0 {
            errors.add(ValidationError::empty_field("bride_resident_id", "Bride"));
        }
        validate_date(&self.marriage_date, "marriage_date", &mut errors);
        validate_amount(&self.amount, "amount", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &MarriageRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let today = Local::now().date_naive();

    let groom = resolver::resolve_resident(ctx.resident(req.groom_resident_id)?, today)
        .with_overrides(req.groom_age, req.groom_civil_status.as_deref());
    let bride = resolver::resolve_resident(ctx.resident(req.bride_resident_id)?, today)
        .with_overrides(req.bride_age, req.bride_civil_status.as_deref());

    let marriage_date = NaiveDate::parse_from_str(req.marriage_date.trim(), "%Y-%m-%d")
        .map_err(|e| DocumentError::Validation(e.to_string()))?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, and *{}*, {} years old, {}, both residents of this barangay, were joined in marriage on *{}* at {}.",
        escape_typst_markup(&groom.full_name.to_uppercase()),
        escape_typst_markup(&groom.age_text()),
        escape_typst_markup(&groom.civil_status_text()),
        escape_typst_markup(&bride.full_name.to_uppercase()),
        escape_typst_markup(&bride.age_text()),
        escape_typst_markup(&bride.civil_status_text()),
        escape_typst_markup(&format_philippine_date(marriage_date)),
        escape_typst_markup(&or_blank(&req.marriage_place)),
    );
    let record_line =
        "This certification is issued based on the records of this office and may be used \
         for all legal intents and purposes."
            .to_string();
    let paragraphs = vec![certification, record_line, given_line(ctx)];

    let output_name = format!(
        "{}-and-{}",
        sanitize_filename(&groom.full_name, "groom"),
        sanitize_filename(&bride.full_name, "bride"),
    );

    Ok(compose(
        CertificateKind::Marriage,
        ctx,
        "MARRIAGE CERTIFICATION",
        &paragraphs,
        FooterFields {
            amount: &req.amount,
            assigned_official: req.assigned_official.as_deref(),
            prepared_by: req.prepared_by.as_deref(),
        },
        &output_name,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{test_context, test_resident};
    use super::*;

    fn two_party_context() -> DocumentContext {
        let mut ctx = test_context();
        let mut bride = test_resident(2, "Maria", "Reyes");
        bride.gender = "Female".to_string();
        ctx.residents.push(bride);
        ctx
    }

    fn request() -> MarriageRequest {
        MarriageRequest {
            groom_resident_id: 1,
            bride_resident_id: 2,
            marriage_date: "2026-02-14".to_string(),
            marriage_place: "San Isidro Parish Church".to_string(),
            ..MarriageRequest::default()
        }
    }

    #[test]
    fn test_render_names_both_parties() {
        let rendered = render(&two_party_context(), &request()).unwrap();
        assert!(rendered.source.contains("JUAN S. DELA CRUZ"));
        assert!(rendered.source.contains("MARIA S. REYES"));
        assert!(rendered.source.contains("February 14, 2026"));
        assert_eq!(rendered.output_name, "juan-s-dela-cruz-and-maria-s-reyes");
    }

    #[test]
    fn test_unknown_bride_is_rejected() {
        let mut req = request();
        req.bride_resident_id = 42;
        assert!(matches!(
            render(&two_party_context(), &req),
            Err(DocumentError::UnknownResident(42))
        ));
    }
}
