//! Certificate templates.
//!
//! One module per certificate type. Each template parses its own request,
//! validates it, derives resident fields through the resolver, and assembles
//! its paragraphs; `compose` then wraps them in the shared page frame so the
//! header, salutation, and signature footer look identical everywhere.

pub mod birth;
pub mod business_clearance;
pub mod business_permit;
pub mod clearance;
pub mod completion;
pub mod fourps;
pub mod indigency;
pub mod jobseeker;
pub mod marriage;
pub mod ownership;
pub mod protection;
pub mod residency;
pub mod solo_parent;
pub mod unemployment;

use chrono::Local;
use serde::Deserialize;

use super::common::{escape_typst_markup, today_spelled_out};
use super::header::{certificate_footer, institutional_header};
use super::layout::{certificate_page_setup, CERTIFICATE_PAGE};
use super::registry::{CertificateKind, RenderedCertificate};
use super::resolver::{self, ResolvedResident, BLANK_LINE};
use super::validation::{validate_amount, ValidationError, ValidationErrors};
use super::{DocumentContext, DocumentError};
use crate::resident::models::Resident;

/// Fields shared by most certificate request forms. Every field defaults so
/// a sparse payload still parses; validation decides what is actually
/// required.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CommonFields {
    pub resident_id: i64,
    pub purpose: String,
    pub custom_purpose: Option<String>,
    pub amount: String,
    pub age: Option<i32>,
    pub civil_status: Option<String>,
    pub assigned_official: Option<String>,
    pub prepared_by: Option<String>,
}

impl CommonFields {
    /// Common checks shared by the resident-backed certificates.
    pub fn validate_into(&self, errors: &mut ValidationErrors) {
        if self.resident_id <= 0 {
            errors.add(ValidationError::empty_field("resident_id", "Resident"));
        }
        validate_amount(&self.amount, "amount", errors);
    }

    pub fn resolved_purpose(&self) -> String {
        resolver::resolve_purpose(&self.purpose, self.custom_purpose.as_deref())
    }

    /// Look up the selected resident and resolve their derived fields, with
    /// form overrides applied on top.
    pub fn subject<'a>(
        &self,
        ctx: &'a DocumentContext,
    ) -> Result<(&'a Resident, ResolvedResident), DocumentError> {
        let resident = ctx.resident(self.resident_id)?;
        let resolved = resolver::resolve_resident(resident, Local::now().date_naive())
            .with_overrides(self.age, self.civil_status.as_deref());
        Ok((resident, resolved))
    }

    pub fn footer(&self) -> FooterFields<'_> {
        FooterFields {
            amount: &self.amount,
            assigned_official: self.assigned_official.as_deref(),
            prepared_by: self.prepared_by.as_deref(),
        }
    }
}

/// Values printed in the signature footer.
#[derive(Debug, Default)]
pub struct FooterFields<'a> {
    pub amount: &'a str,
    pub assigned_official: Option<&'a str>,
    pub prepared_by: Option<&'a str>,
}

/// Assemble the full one-page document around pre-built body paragraphs.
///
/// Paragraphs must already be valid Typst markup; user-supplied text inside
/// them goes through `escape_typst_markup` at the template.
pub(super) fn compose(
    kind: CertificateKind,
    ctx: &DocumentContext,
    title: &str,
    paragraphs: &[String],
    footer: FooterFields<'_>,
    output_name: &str,
) -> RenderedCertificate {
    let header = institutional_header(&ctx.settings);
    let captain = resolver::resolve_captain(&ctx.officials).map(|o| o.name.as_str());

    let mut source = certificate_page_setup(&CERTIFICATE_PAGE);
    source.push_str(&header.source);
    source.push_str(&format!(
        "#align(center)[#text(size: {}pt, weight: \"bold\")[{}]]\n#v(16pt)\n",
        CERTIFICATE_PAGE.title_size_pt,
        escape_typst_markup(title)
    ));
    source.push_str("*TO WHOM IT MAY CONCERN:*\n#v(8pt)\n");
    for paragraph in paragraphs {
        source.push_str("#par(justify: true, first-line-indent: 20pt)[");
        source.push_str(paragraph);
        source.push_str("]\n#v(8pt)\n");
    }
    source.push_str(&certificate_footer(
        captain,
        footer.assigned_official,
        footer.amount,
        footer.prepared_by,
    ));

    RenderedCertificate {
        kind,
        source,
        assets: header.assets,
        output_name: output_name.to_string(),
    }
}

/// The closing "Given this ..." line, localized to the configured barangay.
pub(super) fn given_line(ctx: &DocumentContext) -> String {
    let s = &ctx.settings;
    format!(
        "Given this *{}*, at Barangay {}, {}, {}, Philippines.",
        escape_typst_markup(&today_spelled_out()),
        escape_typst_markup(&or_blank(&s.barangay)),
        escape_typst_markup(&or_blank(&s.municipality)),
        escape_typst_markup(&or_blank(&s.province)),
    )
}

/// The standard "issued upon the request of" paragraph.
pub(super) fn purpose_line(full_name: &str, purpose: &str) -> String {
    format!(
        "This certification is issued upon the request of *{}* for *{}* purposes.",
        escape_typst_markup(full_name),
        escape_typst_markup(purpose),
    )
}

/// Residential address of a resident record, blank placeholder when the
/// record carries none.
pub(super) fn resident_address(resident: &Resident) -> String {
    let mut parts = Vec::new();
    if !resident.zone.trim().is_empty() {
        parts.push(format!("Zone {}", resident.zone.trim()));
    }
    for piece in [&resident.barangay, &resident.town, &resident.province] {
        if !piece.trim().is_empty() {
            parts.push(piece.trim().to_string());
        }
    }
    if parts.is_empty() {
        BLANK_LINE.to_string()
    } else {
        parts.join(", ")
    }
}

pub(super) fn or_blank(value: &str) -> String {
    if value.trim().is_empty() {
        BLANK_LINE.to_string()
    } else {
        value.trim().to_string()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use crate::official::models::Official;
    use crate::resident::models::{Resident, ResidentStatus};
    use crate::settings::models::Settings;

    use super::DocumentContext;

    pub fn test_resident(id: i64, first: &str, last: &str) -> Resident {
        Resident {
            id,
            first_name: first.to_string(),
            middle_name: Some("Santos".to_string()),
            last_name: last.to_string(),
            suffix: None,
            civil_status: "Single".to_string(),
            gender: "Male".to_string(),
            nationality: "Filipino".to_string(),
            religion: None,
            occupation: None,
            zone: "3".to_string(),
            barangay: "San Isidro".to_string(),
            town: "Malolos".to_string(),
            province: "Bulacan".to_string(),
            status: ResidentStatus::Active,
            birthplace: None,
            educational_attainment: None,
            birthday: chrono::NaiveDate::from_ymd_opt(1995, 6, 15),
            is_voter: true,
            is_pwd: false,
            is_senior: false,
            is_solo: false,
            avg_income: None,
            mobile_number: None,
        }
    }

    pub fn test_context() -> DocumentContext {
        DocumentContext {
            settings: Settings {
                barangay: "San Isidro".to_string(),
                municipality: "Malolos".to_string(),
                province: "Bulacan".to_string(),
                phone_number: String::new(),
                email: String::new(),
                barangay_seal: None,
                municipal_seal: None,
            },
            officials: vec![Official {
                id: 1,
                name: "PEDRO A. SANTOS".to_string(),
                role: "Barangay Captain".to_string(),
                section: "Barangay Officials".to_string(),
                contact: None,
                zone: None,
                term_start: None,
                term_end: None,
            }],
            residents: vec![test_resident(1, "Juan", "Dela Cruz")],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_includes_frame_and_body() {
        let ctx = testutil::test_context();
        let rendered = compose(
            CertificateKind::Residency,
            &ctx,
            "CERTIFICATION",
            &["Body paragraph.".to_string()],
            FooterFields::default(),
            "juan-dela-cruz",
        );
        assert!(rendered.source.contains("Republic of the Philippines"));
        assert!(rendered.source.contains("TO WHOM IT MAY CONCERN"));
        assert!(rendered.source.contains("Body paragraph."));
        assert!(rendered.source.contains("PEDRO A. SANTOS"));
        assert!(rendered.source.contains("Punong Barangay"));
    }

    #[test]
    fn test_resident_address_joins_parts() {
        let resident = testutil::test_resident(1, "Juan", "Dela Cruz");
        assert_eq!(resident_address(&resident), "Zone 3, San Isidro, Malolos, Bulacan");
    }

    #[test]
    fn test_common_fields_require_resident() {
        let mut errors = ValidationErrors::new();
        CommonFields::default().validate_into(&mut errors);
        assert!(!errors.is_empty());
    }
}
