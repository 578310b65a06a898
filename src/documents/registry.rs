//! Certificate template registry.
//!
//! A closed mapping from certificate-type keys to renderers. Lookup of an
//! unknown key yields `None` and the caller decides what to do; there is no
//! fallback template. Adding a certificate type means adding a variant here,
//! a template module, and an arm in `render` - the match is exhaustive so a
//! missing arm fails to compile.

use serde_json::Value;

use super::certificates;
use super::{DocumentAsset, DocumentContext, DocumentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertificateKind {
    Fourps,
    Clearance,
    Indigency,
    Residency,
    BusinessPermit,
    BusinessClearance,
    Unemployment,
    BirthRegistration,
    Marriage,
    Ownership,
    SoloParent,
    Jobseeker,
    Completion,
    Protection,
}

impl CertificateKind {
    pub const ALL: [CertificateKind; 14] = [
        CertificateKind::Fourps,
        CertificateKind::Clearance,
        CertificateKind::Indigency,
        CertificateKind::Residency,
        CertificateKind::BusinessPermit,
        CertificateKind::BusinessClearance,
        CertificateKind::Unemployment,
        CertificateKind::BirthRegistration,
        CertificateKind::Marriage,
        CertificateKind::Ownership,
        CertificateKind::SoloParent,
        CertificateKind::Jobseeker,
        CertificateKind::Completion,
        CertificateKind::Protection,
    ];

    /// Resolve a lower-kebab-case key; unknown keys are `None`, never a panic.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "fourps" => Some(Self::Fourps),
            "brgy-clearance" => Some(Self::Clearance),
            "brgy-indigency" => Some(Self::Indigency),
            "brgy-residency" => Some(Self::Residency),
            "brgy-business-permit" => Some(Self::BusinessPermit),
            "brgy-business-clearance" => Some(Self::BusinessClearance),
            "cert-unemployment" => Some(Self::Unemployment),
            "registration-birth" => Some(Self::BirthRegistration),
            "cert-marriage" => Some(Self::Marriage),
            "cert-ownership" => Some(Self::Ownership),
            "cert-solo" => Some(Self::SoloParent),
            "cert-job" => Some(Self::Jobseeker),
            "cert-completion" => Some(Self::Completion),
            "cert-protection" => Some(Self::Protection),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Fourps => "fourps",
            Self::Clearance => "brgy-clearance",
            Self::Indigency => "brgy-indigency",
            Self::Residency => "brgy-residency",
            Self::BusinessPermit => "brgy-business-permit",
            Self::BusinessClearance => "brgy-business-clearance",
            Self::Unemployment => "cert-unemployment",
            Self::BirthRegistration => "registration-birth",
            Self::Marriage => "cert-marriage",
            Self::Ownership => "cert-ownership",
            Self::SoloParent => "cert-solo",
            Self::Jobseeker => "cert-job",
            Self::Completion => "cert-completion",
            Self::Protection => "cert-protection",
        }
    }

    /// Type label stored on persisted certificate records.
    pub fn type_label(self) -> &'static str {
        match self {
            Self::Fourps => "4Ps Certification",
            Self::Clearance => "Barangay Clearance",
            Self::Indigency => "Certificate of Indigency",
            Self::Residency => "Residency Certificate",
            Self::BusinessPermit => "Business Permit",
            Self::BusinessClearance => "Business Clearance",
            Self::Unemployment => "Certificate of Unemployment",
            Self::BirthRegistration => "Birth Registration",
            Self::Marriage => "Marriage Certificate",
            Self::Ownership => "Certificate of Ownership",
            Self::SoloParent => "Solo Parent Certificate",
            Self::Jobseeker => "First Time Jobseeker Certificate",
            Self::Completion => "Certificate of Completion",
            Self::Protection => "Barangay Protection Order",
        }
    }

    /// Source filename handed to the render engine.
    pub fn template_filename(self) -> String {
        format!("{}.typ", self.key())
    }
}

/// Assembled Typst document for one certificate, ready for the engine.
#[derive(Debug)]
pub struct RenderedCertificate {
    pub kind: CertificateKind,
    pub source: String,
    pub assets: Vec<DocumentAsset>,
    /// Base name for the output file, usually the resident's name.
    pub output_name: String,
}

/// Dispatch a raw form payload to the template for `kind`.
///
/// Each arm parses its own typed request, validates it, and renders; parse
/// failures and validation failures are client errors, not ours.
pub fn render(
    kind: CertificateKind,
    ctx: &DocumentContext,
    form: Value,
) -> Result<RenderedCertificate, DocumentError> {
    match kind {
        CertificateKind::Fourps => certificates::fourps::render(ctx, &parse(form)?),
        CertificateKind::Clearance => certificates::clearance::render(ctx, &parse(form)?),
        CertificateKind::Indigency => certificates::indigency::render(ctx, &parse(form)?),
        CertificateKind::Residency => certificates::residency::render(ctx, &parse(form)?),
        CertificateKind::BusinessPermit => {
            certificates::business_permit::render(ctx, &parse(form)?)
        }
        CertificateKind::BusinessClearance => {
            certificates::business_clearance::render(ctx, &parse(form)?)
        }
        CertificateKind::Unemployment => certificates::unemployment::render(ctx, &parse(form)?),
        CertificateKind::BirthRegistration => certificates::birth::render(ctx, &parse(form)?),
        CertificateKind::Marriage => certificates::marriage::render(ctx, &parse(form)?),
        CertificateKind::Ownership => certificates::ownership::render(ctx, &parse(form)?),
        CertificateKind::SoloParent => certificates::solo_parent::render(ctx, &parse(form)?),
        CertificateKind::Jobseeker => certificates::jobseeker::render(ctx, &parse(form)?),
        CertificateKind::Completion => certificates::completion::render(ctx, &parse(form)?),
        CertificateKind::Protection => certificates::protection::render(ctx, &parse(form)?),
    }
}

fn parse<T: for<'de> serde::Deserialize<'de>>(form: Value) -> Result<T, DocumentError> {
    serde_json::from_value(form).map_err(|err| DocumentError::InvalidRequest(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_round_trip() {
        for kind in CertificateKind::ALL {
            assert_eq!(CertificateKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(CertificateKind::from_key("cert-unknown"), None);
        assert_eq!(CertificateKind::from_key(""), None);
        assert_eq!(CertificateKind::from_key("BRGY-CLEARANCE"), None);
    }

    #[test]
    fn test_registry_is_fourteen_entries() {
        assert_eq!(CertificateKind::ALL.len(), 14);
    }
}
