//! Barangay business clearance.
//!
//! Unlike the permit, the clearance certifies compliance for an already
//! operating business, usually as a prerequisite for the municipal license.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BusinessClearanceRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    pub business_name: String,
    pub business_type: String,
    pub business_location: String,
}

impl BusinessClearanceRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_required(&self.business_name, "business_name", "Business name", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &BusinessClearanceRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (_, resolved) = req.common.subject(ctx)?;

    let business_type = if req.business_type.trim().is_empty() {
        "business".to_string()
    } else {
        req.business_type.trim().to_string()
    };
    let certification = format!(
        "This is to certify that *{}*, a {} located at {}, owned and operated by *{}*, has complied with the requirements of this barangay and is hereby issued this clearance.",
        escape_typst_markup(&req.business_name.trim().to_uppercase()),
        escape_typst_markup(&business_type),
        escape_typst_markup(&or_blank(&req.business_location)),
        escape_typst_markup(&resolved.full_name.to_uppercase()),
    );
    let usage = "This clearance is issued in support of the application for a mayor's \
                 permit and business license."
        .to_string();
    let paragraphs = vec![certification, usage, given_line(ctx)];

    Ok(compose(
        CertificateKind::BusinessClearance,
        ctx,
        "BARANGAY BUSINESS CLEARANCE",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&req.business_name, "business"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    #[test]
    fn test_render_mentions_compliance() {
        let req = BusinessClearanceRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            business_name: "Kape Tayo".to_string(),
            business_type: "Coffee shop".to_string(),
            business_location: "Zone 1".to_string(),
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("KAPE TAYO"));
        assert!(rendered.source.contains("has complied"));
        assert!(rendered.source.contains("mayor's permit"));
    }
}
