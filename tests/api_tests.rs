mod common;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use barangay_registry_server::{certificate, documents, household, resident, settings};

use common::test_state;

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .service(
                    web::scope("/api")
                        .configure(documents::routes::config)
                        .configure(resident::routes::config)
                        .configure(household::routes::config)
                        .configure(settings::routes::config)
                        .configure(certificate::routes::config),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_resident_create_list_and_search() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    for (first, last) in [("Juan", "Dela Cruz"), ("Maria", "Reyes")] {
        let req = test::TestRequest::post()
            .uri("/api/residents")
            .set_json(json!({ "first_name": first, "last_name": last }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let listed: Vec<Value> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/residents").to_request())
            .await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[1]["id"], 2);

    let found: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/residents?q=reyes")
            .to_request(),
    )
    .await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["first_name"], "Maria");
}

#[actix_web::test]
async fn test_resident_patch_updates_only_supplied_fields() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/residents")
            .set_json(json!({
                "first_name": "Juan",
                "last_name": "Dela Cruz",
                "zone": "3",
            }))
            .to_request(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let patched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/residents/{id}"))
            .set_json(json!({ "civil_status": "Married" }))
            .to_request(),
    )
    .await;
    assert_eq!(patched["civil_status"], "Married");
    assert_eq!(patched["zone"], "3");

    let resp = test::call_service(
        &app,
        test::TestRequest::patch()
            .uri("/api/residents/999")
            .set_json(json!({ "zone": "5" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_household_rejects_two_heads() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/households")
            .set_json(json!({
                "household_number": "HH-001",
                "type": "Owner",
                "zone": "1",
                "date_of_residency": "2015-01-01",
                "members": [
                    { "resident_id": 1, "role": "Head" },
                    { "resident_id": 2, "role": "Head" }
                ]
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_household_role_vocabulary_is_complete() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let roles: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/households/roles")
            .to_request(),
    )
    .await;
    assert_eq!(roles.len(), 43);
    assert!(roles.iter().all(|r| !r["definition"].as_str().unwrap().is_empty()));
    assert!(roles.iter().any(|r| r["role"] == "Head"));
}

#[actix_web::test]
async fn test_settings_round_trip() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/api/settings")
            .set_json(json!({ "barangay": "San Isidro", "province": "Bulacan" }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let settings: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/settings").to_request(),
    )
    .await;
    assert_eq!(settings["barangay"], "San Isidro");
    assert_eq!(settings["province"], "Bulacan");
    assert_eq!(settings["municipality"], "");
}

#[actix_web::test]
async fn test_certificate_listing_derives_expiry_and_status() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/certificates")
            .set_json(json!({
                "resident_id": 1,
                "resident_name": "Juan Dela Cruz",
                "certificate_type": "Barangay Clearance",
                "issued_date": "2020-05-10",
                "amount": 50.0
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let views: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/certificates").to_request(),
    )
    .await;
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["expires_on"], "2021-05-10");
    assert_eq!(views[0]["status"], "Expired");
}

#[actix_web::test]
async fn test_document_type_listings() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let types: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/documents/types").to_request(),
    )
    .await;
    assert_eq!(types.len(), 14);
    assert!(types.iter().any(|t| t["key"] == "brgy-clearance"));

    let ledgers: Vec<Value> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/documents/ledgers/types")
            .to_request(),
    )
    .await;
    assert_eq!(ledgers.len(), 11);
}

#[actix_web::test]
async fn test_purpose_vocabulary_is_listed() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let purposes: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/documents/purposes")
            .to_request(),
    )
    .await;
    let options = purposes["options"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert!(options.contains(&json!("Employment")));
    assert_eq!(purposes["custom_sentinel"], "custom");
}

#[actix_web::test]
async fn test_summons_for_unknown_blotter_is_404() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/documents/blotters/42/summons")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_unknown_certificate_type_is_404() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/documents/certificates/cert-unknown")
            .set_json(json!({ "resident_id": 1 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_bad_certificate_payload_is_400() {
    let (state, _storage) = test_state();
    let app = test_app!(state);

    // no resident selected
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/documents/certificates/brgy-clearance")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}
