//! Certificate of indigency.
//!
//! May be requested on behalf of a dependent, in which case the request
//! paragraph names the dependent instead of the resident.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::ValidationErrors;
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct IndigencyRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Name of the dependent the certificate is requested for, if any.
    pub dependent: Option<String>,
}

impl IndigencyRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &IndigencyRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}, belongs to an indigent family in this barangay.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
    );

    let purpose = req.common.resolved_purpose();
    let request_line = match req.dependent.as_deref().map(str::trim) {
        Some(dependent) if !dependent.is_empty() => format!(
            "This certification is issued upon the request of *{}* in behalf of their dependent *{}* for *{}* purposes.",
            escape_typst_markup(&resolved.full_name),
            escape_typst_markup(dependent),
            escape_typst_markup(&purpose),
        ),
        _ => purpose_line(&resolved.full_name, &purpose),
    };

    let paragraphs = vec![certification, request_line, given_line(ctx)];

    Ok(compose(
        CertificateKind::Indigency,
        ctx,
        "CERTIFICATE OF INDIGENCY",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&resolved.full_name, "resident"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    fn request() -> IndigencyRequest {
        IndigencyRequest {
            common: CommonFields {
                resident_id: 1,
                purpose: "Financial Assistance".to_string(),
                ..CommonFields::default()
            },
            dependent: None,
        }
    }

    #[test]
    fn test_render_without_dependent() {
        let rendered = render(&test_context(), &request()).unwrap();
        assert!(rendered.source.contains("indigent family"));
        assert!(!rendered.source.contains("in behalf of"));
    }

    #[test]
    fn test_render_names_dependent() {
        let mut req = request();
        req.dependent = Some("Maria Dela Cruz".to_string());
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("in behalf of their dependent"));
        assert!(rendered.source.contains("Maria Dela Cruz"));
    }
}
