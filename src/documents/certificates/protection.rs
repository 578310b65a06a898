//! Barangay protection order (Republic Act No. 9262).
//!
//! Issued against a named respondent on the application of a resident. Ends
//! with a service block recording who received and served the order.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProtectionRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    pub respondent_name: String,
    pub respondent_address: String,
    /// Summary of the acts complained of, printed verbatim.
    pub incident_summary: String,
    pub copy_received_by: String,
    pub served_by: String,
}

impl ProtectionRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        validate_required(
            &self.respondent_name,
            "respondent_name",
            "Respondent's name",
            &mut errors,
        );
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &ProtectionRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (_, complainant) = req.common.subject(ctx)?;

    let order = format!(
        "Pursuant to Republic Act No. 9262, otherwise known as the Anti-Violence Against Women and Their Children Act of 2004, a Barangay Protection Order is hereby issued against *{}*, of {}, upon the application of *{}*.",
        escape_typst_markup(&req.respondent_name.trim().to_uppercase()),
        escape_typst_markup(&or_blank(&req.respondent_address)),
        escape_typst_markup(&complainant.full_name.to_uppercase()),
    );
    let mut paragraphs = vec![order];
    if !req.incident_summary.trim().is_empty() {
        paragraphs.push(format!(
            "#block(inset: (left: 30pt))[_{}_]",
            escape_typst_markup(req.incident_summary.trim()),
        ));
    }
    paragraphs.push(
        "The respondent is hereby ordered to desist from committing or threatening to commit \
         any act of violence against the applicant, directly or indirectly. This order is \
         effective for fifteen (15) days from the date of issuance. Violation of this order \
         is punishable by imprisonment of thirty (30) days without prejudice to any other \
         action that may be filed."
            .to_string(),
    );
    paragraphs.push(given_line(ctx));
    paragraphs.push(format!(
        "#v(10pt)\nCopy received by: *{}* \\\nServed by: *{}*",
        escape_typst_markup(&or_blank(&req.copy_received_by)),
        escape_typst_markup(&or_blank(&req.served_by)),
    ));

    Ok(compose(
        CertificateKind::Protection,
        ctx,
        "BARANGAY PROTECTION ORDER",
        &paragraphs,
        req.common.footer(),
        &sanitize_filename(&complainant.full_name, "complainant"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    fn request() -> ProtectionRequest {
        ProtectionRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            respondent_name: "Carlos Mendoza".to_string(),
            respondent_address: "Zone 5, San Isidro".to_string(),
            incident_summary: "Repeated verbal threats on 2026-01-10".to_string(),
            copy_received_by: String::new(),
            served_by: String::new(),
        }
    }

    #[test]
    fn test_render_cites_act_and_respondent() {
        let rendered = render(&test_context(), &request()).unwrap();
        assert!(rendered.source.contains("Republic Act No. 9262"));
        assert!(rendered.source.contains("CARLOS MENDOZA"));
        assert!(rendered.source.contains("fifteen (15) days"));
    }

    #[test]
    fn test_missing_respondent_is_rejected() {
        let mut req = request();
        req.respondent_name.clear();
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::Validation(_))
        ));
    }
}
