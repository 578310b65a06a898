//! Barangay clearance.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::ValidationErrors;
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ClearanceRequest {
    #[serde(flatten)]
    pub common: CommonFields,
}

impl ClearanceRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &ClearanceRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino citizen, is a resident of {}.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
    );
    let record_line = "This further certifies that the above-named person has no derogatory \
                       record on file in this office as of the date of issuance."
        .to_string();
    let paragraphs = vec![
        certification,
        record_line,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::Clearance,
        ctx,
        "BARANGAY CLEARANCE",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&resolved.full_name, "resident"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    #[test]
    fn test_render_mentions_clean_record() {
        let req = ClearanceRequest {
            common: CommonFields {
                resident_id: 1,
                purpose: "Identification".to_string(),
                ..CommonFields::default()
            },
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("no derogatory"));
        assert!(rendered.source.contains("JUAN S. DELA CRUZ"));
    }

    #[test]
    fn test_missing_resident_selection_is_rejected() {
        let req = ClearanceRequest::default();
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::Validation(_))
        ));
    }
}
