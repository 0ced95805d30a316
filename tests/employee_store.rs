mod common;

use common::{employee, store_with, FailingService, GatedService};
use staffdesk::employee::{sample_employees, MockEmployeeService, NewEmployee};
use staffdesk::store::{EmployeeStore, OperationKind, StoreError, DEFAULT_FETCH_ERROR};
use std::sync::Arc;
use std::time::Duration;

fn mock_store() -> EmployeeStore {
    store_with(MockEmployeeService::instant())
}

fn new_employee(name: &str) -> NewEmployee {
    NewEmployee {
        first_name: name.to_string(),
        address: "99 ถนนสุขุมวิท กรุงเทพฯ".to_string(),
    }
}

#[tokio::test]
async fn fetch_then_create_end_to_end() {
    let store = mock_store();

    store.fetch_employees().await.expect("fetch");
    let state = store.snapshot();
    assert_eq!(state.employees, sample_employees());
    assert!(!state.loading);
    assert_eq!(state.error, None);

    let created = store
        .create_employee(new_employee("ทดสอบ"))
        .await
        .expect("create");
    let state = store.snapshot();
    assert_eq!(state.employees.len(), 5);
    let last = state.employees.last().expect("last record");
    assert_eq!(last.first_name, "ทดสอบ");
    assert_eq!(last, &created);
}

#[tokio::test]
async fn creates_in_quick_succession_get_distinct_ids() {
    let store = mock_store();
    let (a, b) = tokio::join!(
        store.create_employee(new_employee("หนึ่ง")),
        store.create_employee(new_employee("สอง")),
    );
    let (a, b) = (a.expect("first create"), b.expect("second create"));
    assert_ne!(a.id, b.id);
    assert_eq!(store.snapshot().employees.len(), 2);
}

#[tokio::test]
async fn delete_removes_only_the_matching_record() {
    let store = mock_store();
    store.fetch_employees().await.expect("fetch");

    let id = store
        .delete_employee("1234500002".to_string())
        .await
        .expect("delete");
    assert_eq!(id, "1234500002");

    let ids: Vec<String> = store
        .snapshot()
        .employees
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, ["1234500001", "1234500003", "1234500004"]);
}

#[tokio::test]
async fn delete_of_absent_id_leaves_state_unchanged() {
    let store = mock_store();
    store.fetch_employees().await.expect("fetch");
    let before = store.snapshot();

    store
        .delete_employee("does-not-exist".to_string())
        .await
        .expect("mock delete always succeeds");
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn update_replaces_in_place_and_ignores_absent_ids() {
    let store = mock_store();
    store.fetch_employees().await.expect("fetch");

    let renamed = employee("1234500003", "จิราพร ใหม่");
    store.update_employee(renamed.clone()).await.expect("update");
    let state = store.snapshot();
    assert_eq!(state.employees[2], renamed);
    assert_eq!(state.employees.len(), 4);

    let before = store.snapshot();
    store
        .update_employee(employee("missing", "ไม่มี"))
        .await
        .expect("update");
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn rejected_fetch_records_message() {
    let store = store_with(FailingService::with_message("backend down"));
    let err = store.fetch_employees().await.unwrap_err();
    assert_eq!(
        err,
        StoreError::Rejected {
            kind: OperationKind::Fetch,
            message: "backend down".to_string()
        }
    );

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("backend down"));
}

#[tokio::test]
async fn rejected_fetch_without_message_uses_default() {
    let store = store_with(FailingService::without_message());
    store.fetch_employees().await.unwrap_err();

    let state = store.snapshot();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(DEFAULT_FETCH_ERROR));
}

#[tokio::test]
async fn rejected_mutations_leave_state_untouched() {
    let store = store_with(FailingService::with_message("nope"));
    let before = store.snapshot();

    let err = store
        .create_employee(new_employee("ทดสอบ"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), OperationKind::Create);
    let err = store
        .update_employee(employee("1", "ทดสอบ"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), OperationKind::Update);
    let err = store.delete_employee("1".to_string()).await.unwrap_err();
    assert_eq!(err.kind(), OperationKind::Delete);

    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn fetch_sets_loading_while_pending() {
    let service = Arc::new(GatedService::default());
    let store = EmployeeStore::new(service.clone());

    let task = tokio::spawn({
        let store = store.clone();
        async move { store.fetch_employees().await }
    });
    service.wait_for_calls(1).await;

    let state = store.snapshot();
    assert!(state.loading);
    assert_eq!(state.error, None);

    service.release(0, Ok(sample_employees()));
    task.await.expect("join").expect("fetch");
    assert!(!store.snapshot().loading);
}

#[tokio::test]
async fn overlapping_fetches_are_last_settled_wins() {
    let service = Arc::new(GatedService::default());
    let store = EmployeeStore::new(service.clone());

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.fetch_employees().await }
    });
    service.wait_for_calls(1).await;
    let second = tokio::spawn({
        let store = store.clone();
        async move { store.fetch_employees().await }
    });
    service.wait_for_calls(2).await;

    // Second request settles first; its result is replaced by the first.
    service.release(1, Ok(vec![employee("B", "ข")]));
    second.await.expect("join").expect("fetch");
    let state = store.snapshot();
    assert!(!state.loading, "the first settlement clears loading");
    assert_eq!(state.employees[0].id, "B");

    service.release(0, Ok(vec![employee("A", "ก")]));
    first.await.expect("join").expect("fetch");
    let state = store.snapshot();
    assert_eq!(state.employees.len(), 1);
    assert_eq!(state.employees[0].id, "A");
}

#[tokio::test(start_paused = true)]
async fn mock_latency_is_honoured() {
    let store = store_with(MockEmployeeService::with_delays(
        Duration::from_millis(1000),
        Duration::from_millis(500),
    ));

    let started = tokio::time::Instant::now();
    store.fetch_employees().await.expect("fetch");
    assert!(started.elapsed() >= Duration::from_millis(1000));

    let started = tokio::time::Instant::now();
    store
        .delete_employee("1234500001".to_string())
        .await
        .expect("delete");
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(started.elapsed() < Duration::from_millis(1000));
}
