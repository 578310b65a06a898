//! Certificate of residency.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_year, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ResidencyRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Year the resident settled in the barangay.
    pub residency_year: String,
}

impl ResidencyRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_year(&self.residency_year, "residency_year", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &ResidencyRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, is a bona fide resident of {} since the year *{}*.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
        escape_typst_markup(req.residency_year.trim()),
    );
    let paragraphs = vec![
        certification,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::Residency,
        ctx,
        "CERTIFICATE OF RESIDENCY",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&resolved.full_name, "resident"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    fn request() -> ResidencyRequest {
        ResidencyRequest {
            common: CommonFields {
                resident_id: 1,
                purpose: "Employment".to_string(),
                ..CommonFields::default()
            },
            residency_year: "2015".to_string(),
        }
    }

    #[test]
    fn test_render_contains_name_and_year() {
        let rendered = render(&test_context(), &request()).unwrap();
        assert!(rendered.source.contains("JUAN S. DELA CRUZ"));
        assert!(rendered.source.contains("2015"));
        assert!(rendered.source.contains("Employment"));
        assert_eq!(rendered.output_name, "juan-s-dela-cruz");
    }

    #[test]
    fn test_missing_year_is_rejected() {
        let mut req = request();
        req.residency_year.clear();
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_resident_is_rejected() {
        let mut req = request();
        req.common.resident_id = 99;
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::UnknownResident(99))
        ));
    }
}
