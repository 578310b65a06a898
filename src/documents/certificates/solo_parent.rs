//! Solo parent certification (Republic Act No. 8972).

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{ValidationError, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SoloParentRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    pub child_count: u32,
}

impl SoloParentRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        if self.child_count == 0 {
            errors.add(
                ValidationError::new("child_count", "Number of children must be at least 1")
                    .with_suggestion("A solo parent certificate requires at least one dependent"),
            );
        }
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &SoloParentRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let children = if req.child_count == 1 {
        "one (1) child".to_string()
    } else {
        format!("{} children", req.child_count)
    };
    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}, is a solo parent within the purview of Republic Act No. 8972, otherwise known as the Solo Parents' Welfare Act of 2000, singly providing for {}.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
        escape_typst_markup(&children),
    );
    let paragraphs = vec![
        certification,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::SoloParent,
        ctx,
        "SOLO PARENT CERTIFICATION",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&resolved.full_name, "resident"),
    ))
}
