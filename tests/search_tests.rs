use barangay_registry_server::household::models::Household;
use barangay_registry_server::resident::models::Resident;
use barangay_registry_server::search::{
    search_households, search_residents, sanitize,
};

fn resident(id: i64, first: &str, middle: Option<&str>, last: &str) -> Resident {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "first_name": first,
        "middle_name": middle,
        "last_name": last,
        "zone": "3",
    }))
    .unwrap()
}

fn household(id: i64, number: &str, head: &str) -> Household {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "household_number": number,
        "type": "Owner",
        "head": head,
        "zone": "1",
        "date_of_residency": "2015-01-01",
    }))
    .unwrap()
}

#[test]
fn test_resident_search_matches_assembled_full_name() {
    let residents = vec![
        resident(1, "Juan", Some("Santos"), "Dela Cruz"),
        resident(2, "Maria", None, "Reyes"),
    ];
    // "Juan S. Dela Cruz" only exists in the assembled form
    let found = search_residents(&residents, "juan s. dela");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
}

#[test]
fn test_resident_search_is_case_insensitive() {
    let residents = vec![
        resident(1, "Juan", None, "Dela Cruz"),
        resident(2, "Maria", None, "Reyes"),
    ];
    let found = search_residents(&residents, "REYES");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 2);
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let residents = vec![
        resident(3, "Celia", None, "Uy"),
        resident(1, "Juan", None, "Dela Cruz"),
    ];
    let found = search_residents(&residents, "  ");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, 3);
    assert_eq!(found[1].id, 1);
}

#[test]
fn test_metacharacters_match_literally() {
    let households = vec![
        household(1, "HH-001 (main)", "Juan Dela Cruz"),
        household(2, "HH-002", "Maria Reyes"),
    ];
    let found = search_households(&households, "(main)");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
    assert_eq!(sanitize("(main)"), r"\(main\)");
}

#[test]
fn test_no_match_yields_empty() {
    let households = vec![household(1, "HH-001", "Juan Dela Cruz")];
    assert!(search_households(&households, "zzz").is_empty());
}
