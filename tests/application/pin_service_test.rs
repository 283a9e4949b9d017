use std::sync::Arc;

use task_lab::application::services::{PinError, PinService, RecordStore};
use task_lab::domain::ValidationError;
use task_lab::infrastructure::storage::InMemoryKeyValueStore;

use crate::helpers::CountingKeyValueStore;

fn pin_service() -> PinService {
    PinService::new(Arc::new(RecordStore::new(Arc::new(
        InMemoryKeyValueStore::new(),
    ))))
}

#[tokio::test]
async fn given_no_pin_when_verifying_then_any_candidate_unlocks() {
    let service = pin_service();

    assert!(!service.is_enabled().await.unwrap());
    assert!(service.verify("").await.unwrap());
}

#[tokio::test]
async fn given_set_pin_when_verifying_then_only_matching_candidate_unlocks() {
    let service = pin_service();

    service.set_pin("4821").await.unwrap();

    assert!(service.is_enabled().await.unwrap());
    assert!(service.verify("4821").await.unwrap());
    assert!(!service.verify("1111").await.unwrap());
    assert!(!service.verify("").await.unwrap());
}

#[tokio::test]
async fn given_invalid_pin_when_setting_then_nothing_is_written() {
    let kv = Arc::new(CountingKeyValueStore::default());
    let service = PinService::new(Arc::new(RecordStore::new(kv.clone())));

    let result = service.set_pin("12a").await;

    assert!(matches!(
        result,
        Err(PinError::Validation(ValidationError::InvalidPin))
    ));
    assert_eq!(kv.mutations(), 0);
}

#[tokio::test]
async fn given_set_pin_when_clearing_then_lock_is_disabled() {
    let service = pin_service();
    service.set_pin("4821").await.unwrap();

    service.clear_pin().await.unwrap();

    assert!(!service.is_enabled().await.unwrap());
    assert!(service.verify("0000").await.unwrap());
}
