use task_lab::application::ports::KeyValueStore;
use task_lab::application::services::JOBS_KEY;
use task_lab::infrastructure::storage::LocalKeyValueStore;

fn create_test_store() -> (tempfile::TempDir, LocalKeyValueStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalKeyValueStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_missing_key_when_getting_then_returns_none() {
    let (_dir, store) = create_test_store();

    let value = store.get(JOBS_KEY).await.unwrap();

    assert_eq!(value, None);
}

#[tokio::test]
async fn given_stored_value_when_getting_then_value_matches() {
    let (_dir, store) = create_test_store();

    store.set(JOBS_KEY, "[]").await.unwrap();

    assert_eq!(store.get(JOBS_KEY).await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn given_stored_value_when_overwriting_then_latest_value_wins() {
    let (_dir, store) = create_test_store();

    store.set("tasklab.pin.v1", "1234").await.unwrap();
    store.set("tasklab.pin.v1", "5678").await.unwrap();

    assert_eq!(
        store.get("tasklab.pin.v1").await.unwrap().as_deref(),
        Some("5678")
    );
}

#[tokio::test]
async fn given_stored_value_when_removing_then_get_returns_none() {
    let (_dir, store) = create_test_store();
    store.set("tasklab.pin.v1", "1234").await.unwrap();

    store.remove("tasklab.pin.v1").await.unwrap();

    assert_eq!(store.get("tasklab.pin.v1").await.unwrap(), None);
}

#[tokio::test]
async fn given_missing_key_when_removing_then_succeeds() {
    let (_dir, store) = create_test_store();

    store.remove("tasklab.pin.v1").await.unwrap();
}

#[tokio::test]
async fn given_values_when_reopening_store_then_values_persist() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let store = LocalKeyValueStore::new(dir.path().to_path_buf()).unwrap();
        store.set(JOBS_KEY, r#"[{"id":"a"}]"#).await.unwrap();
    }

    let reopened = LocalKeyValueStore::new(dir.path().to_path_buf()).unwrap();

    assert_eq!(
        reopened.get(JOBS_KEY).await.unwrap().as_deref(),
        Some(r#"[{"id":"a"}]"#)
    );
}

#[tokio::test]
async fn given_missing_base_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("data").join("ledger");

    let store = LocalKeyValueStore::new(nested.clone()).unwrap();
    store.set(JOBS_KEY, "[]").await.unwrap();

    assert!(nested.is_dir());
}
