//! 4Ps (Pantawid Pamilyang Pilipino Program) membership certification.

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::ValidationErrors;
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, purpose_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FourpsRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Household 4Ps ID number, if the requester knows it.
    pub household_id: Option<String>,
}

impl FourpsRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &FourpsRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let id_clause = match req.household_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => format!(
            " under Household ID No. *{}*",
            escape_typst_markup(id)
        ),
        _ => String::new(),
    };
    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}, is a beneficiary of the Pantawid Pamilyang Pilipino Program (4Ps){} in this barangay.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
        id_clause,
    );
    let paragraphs = vec![
        certification,
        purpose_line(&resolved.full_name, &req.common.resolved_purpose()),
        given_line(ctx),
    ];

    Ok(compose(
        CertificateKind::Fourps,
        ctx,
        "4Ps CERTIFICATION",
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
    fn test_render_names_program() {
        let req = FourpsRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            household_id: Some("4PS-2024-001".to_string()),
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("Pantawid Pamilyang Pilipino Program"));
        assert!(rendered.source.contains("4PS-2024-001"));
    }
}
