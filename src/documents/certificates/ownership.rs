//! Certificate of ownership.
//!
//! The property description is free text supplied by the requester; it is
//! escaped and printed as its own indented paragraph.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct OwnershipRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Free-text description of the property being certified.
    pub ownership_text: String,
}

impl OwnershipRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_required(
            &self.ownership_text,
            "ownership_text",
            "Property description",
            &mut errors,
        );
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &OwnershipRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}, is the lawful owner of the following described property:",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
    );
    let description = format!(
        "#block(inset: (left: 30pt))[_{}_]",
        escape_typst_markup(req.ownership_text.trim()),
    );
    let paragraphs = vec![
        certification,
        description,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::Ownership,
        ctx,
        "CERTIFICATE OF OWNERSHIP",
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
    fn test_render_carries_property_description() {
        let req = OwnershipRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            ownership_text: "One (1) carabao, male, approx. 4 years old".to_string(),
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("lawful owner"));
        assert!(rendered.source.contains("One (1) carabao"));
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let req = OwnershipRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            ownership_text: String::new(),
        };
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::Validation(_))
        ));
    }
}
