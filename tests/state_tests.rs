mod common;

use std::time::Duration;

use barangay_registry_server::resident::models::Resident;
use barangay_registry_server::state::RESIDENTS_OBJECT;

use common::test_state;

fn resident(id: i64, first: &str, last: &str) -> Resident {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "first_name": first,
        "last_name": last,
    }))
    .unwrap()
}

#[tokio::test]
async fn test_missing_object_degrades_to_empty() {
    let (state, _storage) = test_state();
    let residents: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;
    assert!(residents.is_empty());
}

#[tokio::test]
async fn test_corrupt_object_degrades_to_empty() {
    let (state, storage) = test_state();
    storage.seed("residents.json", b"{not json").await;
    let residents: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;
    assert!(residents.is_empty());
}

#[tokio::test]
async fn test_put_then_get_round_trips_through_cache() {
    let (state, _storage) = test_state();
    let records = vec![resident(1, "Juan", "Dela Cruz"), resident(2, "Maria", "Reyes")];

    state.put_object(RESIDENTS_OBJECT, &records).await.unwrap();
    let loaded: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].first_name, "Juan");
    assert_eq!(loaded[1].last_name, "Reyes");
}

#[tokio::test]
async fn test_worker_eventually_persists_to_storage() {
    let (state, storage) = test_state();
    let records = vec![resident(1, "Juan", "Dela Cruz")];
    state.put_object(RESIDENTS_OBJECT, &records).await.unwrap();

    // debounce window is 500ms; give the worker room
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let bytes = storage.file("residents.json").await.expect("persisted");
    let persisted: Vec<Resident> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].first_name, "Juan");
}

#[tokio::test]
async fn test_concurrent_creates_never_lose_records() {
    let (state, _storage) = test_state();

    let mut handles = Vec::new();
    for i in 0..10 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            state
                .modify_object(RESIDENTS_OBJECT, |residents: &mut Vec<Resident>| {
                    let id = residents.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                    residents.push(resident(id, &format!("Resident{i}"), "Test"));
                    id
                })
                .await
                .unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());

    let residents: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;
    assert_eq!(residents.len(), 10);
}

#[tokio::test]
async fn test_update_object_miss_skips_the_write() {
    let (state, storage) = test_state();

    let result = state
        .update_object(RESIDENTS_OBJECT, |residents: &mut Vec<Resident>| {
            residents.iter_mut().find(|r| r.id == 99).map(|_| ())
        })
        .await
        .unwrap();
    assert!(result.is_none());

    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert!(storage.file("residents.json").await.is_none());
}

#[tokio::test]
async fn test_get_reads_seeded_storage() {
    let (state, storage) = test_state();
    let records = vec![resident(7, "Ana", "Santos")];
    storage
        .seed("residents.json", &serde_json::to_vec(&records).unwrap())
        .await;

    let loaded: Vec<Resident> = state.get_object(RESIDENTS_OBJECT).await;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 7);
}
