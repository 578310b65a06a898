//! First time jobseeker certification (Republic Act No. 11261).

use serde::Deserialize;

use crate::documents::common::{escape_typst_markup, sanitize_filename};
use crate::documents::registry::{CertificateKind, RenderedCertificate};
use crate::documents::validation::ValidationErrors;
use crate::documents::{DocumentContext, DocumentError};

use super::{compose, given_line, resident_address, CommonFields};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct JobseekerRequest {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Years the applicant has resided in the barangay.
    pub years_of_residency: Option<u32>,
}

impl JobseekerRequest {
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        self.common.validate_into(&mut errors);
        errors.into_result().map_err(DocumentError::Validation)
    }
}

pub fn render(
    ctx: &DocumentContext,
    req: &JobseekerRequest,
) -> Result<RenderedCertificate, DocumentError> {
    req.validate()?;
    let (resident, resolved) = req.common.subject(ctx)?;

    let residency_clause = match req.years_of_residency {
        Some(years) if years > 0 => format!(" for {} year(s)", years),
        _ => String::new(),
    };
    let certification = format!(
        "This is to certify that *{}*, {} years old, {}, Filipino, a resident of {}{}, is a first time jobseeker and is availing of the benefits of Republic Act No. 11261, otherwise known as the First Time Jobseekers Assistance Act.",
        escape_typst_markup(&resolved.full_name.to_uppercase()),
        escape_typst_markup(&resolved.age_text()),
        escape_typst_markup(&resolved.civil_status_text()),
        escape_typst_markup(&resident_address(resident)),
        escape_typst_markup(&residency_clause),
    );
    let validity =
        "This certification is valid for one (1) year from the date of issuance and may be \
         used only once in availing of the benefits of the Act."
            .to_string();
    let paragraphs = vec![certification, validity, given_line(ctx)];

    Ok(compose(
        CertificateKind::Jobseeker,
        ctx,
        "FIRST TIME JOBSEEKER CERTIFICATION",
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
    fn test_render_cites_the_act_and_validity() {
        let req = JobseekerRequest {
            common: CommonFields {
                resident_id: 1,
                ..CommonFields::default()
            },
            years_of_residency: Some(5),
        };
        let rendered = render(&test_context(), &req).unwrap();
        assert!(rendered.source.contains("Republic Act No. 11261"));
        assert!(rendered.source.contains("for 5 year(s)"));
        assert!(rendered.source.contains("valid for one (1) year"));
    }
}
