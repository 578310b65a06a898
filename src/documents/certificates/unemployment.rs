//! Certificate of unemployment.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::ValidationErrors;
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct UnemploymentRequest {
    #[serde(flatten)]
    pub common: CommonFields,
}

impl UnemploymentRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &UnemploymentRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}, is presently unemployed and has no permanent source of income, based on the records of this office and personal knowledge of the undersigned.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
    );
    let paragraphs = vec![
        certification,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::Unemployment,
        ctx,
        "CERTIFICATE OF UNEMPLOYMENT",
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
    fn test_render_states_unemployment() {
        let req = UnemploymentRequest {
            common: CommonFields {
                resident_id: 1,
                purpose: "Scholarship".to_string(),
                ..CommonFields::default()
            },
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("presently unemployed"));
        assert!(rendered.source.contains("Scholarship"));
    }
}
