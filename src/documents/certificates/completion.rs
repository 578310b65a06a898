//! Certificate of project completion.
//!
//! The only template not tied to a resident record: it certifies a barangay
//! project and carries its own signatory lines (noted by / accepted by)
//! above the standard footer.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::documents::common::{
    escape_typst_markup, format_philippine_date, sanitize_filename,
};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::{
    validate_amount, validate_date, validate_date_optional, validate_required, ValidationErrors,
};
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, or_blank, FooterFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CompletionRequest {
    pub project_name: String,
    pub project_description: String,
    pub location: String,
    pub period_from: String,
    pub period_to: String,
    /// ISO date the project was completed.
    pub completion_date: String,
    pub noted_by: String,
    pub noted_by_role: String,
    pub accepted_by: String,
    pub accepted_by_role: String,
    pub amount: String,
    pub assigned_official: Option<String>,
    pub prepared_by: Option<String>,
}

impl CompletionRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        validate_required(&self.project_name, "project_name", "Project name", &mut errors);
        validate_date(&self.completion_date, "completion_date", &mut errors);
        validate_date_optional(&self.period_from, "period_from", &mut errors);
        validate_date_optional(&self.period_to, "period_to", &mut errors);
        validate_amount(&self.amount, "amount", &mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

fn period_text(from: &str, to: &str) -> String {
    let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok();
    match (parse(from), parse(to)) {
        (Some(from), Some(to)) => format!(
            "{} to {}",
            format_philippine_date(from),
            format_philippine_date(to)
        ),
        _ => or_blank(""),
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &CompletionRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;

    let completion_date = NaiveDate::parse_from_str(req.completion_date.trim(), "%Y-%m-%d")
        .map_err(|e| DocumentError::Validation(e.to_string()))?;

    let certification = format!(
        "This is to certify that the project *{}* has been completed on *{}* in accordance with the approved program of works.",
        escape_typst_markup(&req.project_name.trim().to_uppercase()),
        escape_typst_markup(&format_philippine_date(completion_date)),
    );
    let details = format!(
        "#block(inset: (left: 30pt))[Description: {} \\\nLocation: {} \\\nPeriod covered: {}]",
        escape_typst_markup(&or_blank(&req.project_description)),
        escape_typst_markup(&or_blank(&req.location)),
        escape_typst_markup(&period_text(&req.period_from, &req.period_to)),
    );
    let signatories = format!(
        "#v(10pt)\n#grid(\n  columns: (1fr, 1fr),\n  align(left)[Noted by: \\\n#v(10pt)\n*{}* \\\n{}],\n  align(right)[Accepted by: \\\n#v(10pt)\n*{}* \\\n{}],\n)",
        escape_typst_markup(&or_blank(&req.noted_by)),
        escape_typst_markup(&or_blank(&req.noted_by_role)),
        escape_typst_markup(&or_blank(&req.accepted_by)),
        escape_typst_markup(&or_blank(&req.accepted_by_role)),
    );
    let paragraphs = vec![certification, details, given_line(ctx), signatories];

    Ok(compose(
        CertificateKind::Completion,
        ctx,
        "CERTIFICATE OF COMPLETION",
        &paragraphs,
        FooterFields {
            amount: &req.amount,
            assigned_official: req.assigned_official.as_deref(),
            prepared_by: req.prepared_by.as_deref(),
        },
        &sanitize_filename(&req.project_name, "project"),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testutil::test_context;
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            project_name: "Drainage Improvement Zone 3".to_string(),
            project_description: "Concrete lining of the Zone 3 drainage canal".to_string(),
            location: "Zone 3".to_string(),
            period_from: "2026-01-05".to_string(),
            period_to: "2026-03-20".to_string(),
            completion_date: "2026-03-20".to_string(),
            noted_by: "PEDRO A. SANTOS".to_string(),
            noted_by_role: "Punong Barangay".to_string(),
            accepted_by: "LORNA T. VILLANUEVA".to_string(),
            accepted_by_role: "Project Engineer".to_string(),
            ..CompletionRequest::default()
        }
    }

    #[test]
    fn test_render_carries_project_and_signatories() {
        let rendered = render(&test_context(), &request()).unwrap();
        assert!(rendered.source.contains("DRAINAGE IMPROVEMENT ZONE 3"));
        assert!(rendered.source.contains("March 20, 2026"));
        assert!(rendered.source.contains("LORNA T. VILLANUEVA"));
        assert_eq!(rendered.output_name, "drainage-improvement-zone-3");
    }

    #[test]
    fn test_missing_completion_date_is_rejected() {
        let mut req = request();
        req.completion_date.clear();
        assert!(matches!(
            render(&test_context(), &req),
            Err(DocumentError::Validation(_))
        ));
    }
}
