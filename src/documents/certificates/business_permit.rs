//! Barangay business permit.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct BusinessPermitRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    pub business_name: String,
    pub business_type: String,
    pub business_location: String,
}

impl BusinessPermitRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_required(&self.business_name, "business_name", "Business name", &mut errors);
        validate_required(&self.business_type, "business_type", "Business type", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &BusinessPermitRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (_, resolved) = req.common.subject(ctx)?;

    let grant = format!(
        "This is to certify that *{}*, a {} located at {}, owned and operated by *{}*, is hereby granted permission to operate within the territorial jurisdiction of this barangay.",
        escape_typst_markup(&req.business_name.trim().to_uppercase()),
        escape_typst_markup(req.business_type.trim()),
        escape_typst_markup(&or_blank(&req.business_location)),
        escape_typst_markup(&resolved.full_name.to_uppercase()),
    );
    let condition = "This permit is issued subject to existing barangay ordinances and is \
                     renewable annually. Any violation of said ordinances is a ground for \
                     revocation."
        .to_string();
    let paragraphs = vec![grant, condition, given_line(ctx)];

    Ok(compose(
        CertificateKind::BusinessPermit,
        ctx,
        "BARANGAY BUSINESS PERMIT",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&req.business_name, "business"),
    ))
}
