use serde_json::json;

use barangay_registry_server::documents::registry::{self, CertificateKind};
use barangay_registry_server::documents::{DocumentContext, DocumentError};
use barangay_registry_server::official::models::Official;
use barangay_registry_server::resident::models::Resident;
use barangay_registry_server::settings::models::Settings;

fn context() -> DocumentContext {
    let resident: Resident = serde_json::from_value(json!({
        "id": 1,
        "first_name": "Juan",
        "middle_name": "Santos",
        "last_name": "Dela Cruz",
        "civil_status": "Married",
        "zone": "3",
        "barangay": "San Isidro",
        "town": "Malolos",
        "province": "Bulacan",
        "birthday": "1990-06-15",
    }))
    .unwrap();

    DocumentContext {
        settings: Settings {
            barangay: "San Isidro".to_string(),
            municipality: "Malolos".to_string(),
            province: "Bulacan".to_string(),
            ..Settings::default()
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
        residents: vec![resident],
    }
}

#[test]
fn test_every_key_dispatches_to_a_template() {
    assert_eq!(CertificateKind::ALL.len(), 14);
    for kind in CertificateKind::ALL {
        assert!(CertificateKind::from_key(kind.key()).is_some());
        assert!(!kind.type_label().is_empty());
        assert!(kind.template_filename().ends_with(".typ"));
    }
}

#[test]
fn test_residency_renders_from_raw_form() {
    let form = json!({
        "resident_id": 1,
        "purpose": "Employment",
        "residency_year": "2015",
    });
    let rendered = registry::render(CertificateKind::Residency, &context(), form).unwrap();
    assert_eq!(rendered.kind, CertificateKind::Residency);
    assert!(rendered.source.contains("JUAN S. DELA CRUZ"));
    assert!(rendered.source.contains("CERTIFICATE OF RESIDENCY"));
    assert!(rendered.source.contains("BARANGAY SAN ISIDRO"));
}

#[test]
fn test_malformed_payload_is_a_client_error() {
    let form = json!({ "resident_id": "not-a-number" });
    let err = registry::render(CertificateKind::Clearance, &context(), form).unwrap_err();
    assert!(matches!(err, DocumentError::InvalidRequest(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_validation_failure_is_a_client_error() {
    // residency without a year
    let form = json!({ "resident_id": 1 });
    let err = registry::render(CertificateKind::Residency, &context(), form).unwrap_err();
    assert!(matches!(err, DocumentError::Validation(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_unknown_resident_is_a_client_error() {
    let form = json!({ "resident_id": 404, "residency_year": "2015" });
    let err = registry::render(CertificateKind::Residency, &context(), form).unwrap_err();
    assert!(matches!(err, DocumentError::UnknownResident(404)));
}

#[test]
fn test_custom_purpose_is_substituted() {
    let form = json!({
        "resident_id": 1,
        "purpose": "custom",
        "custom_purpose": "Passport renewal",
    });
    let rendered = registry::render(CertificateKind::Clearance, &context(), form).unwrap();
    assert!(rendered.source.contains("Passport renewal"));
}
