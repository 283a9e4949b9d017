use std::sync::Arc;

use task_lab::application::ports::{Delivery, KeyValueStore};
use task_lab::application::services::{
    JOBS_KEY, JobTotals, LedgerError, LedgerService, RecordStore, ReportingEngine,
};
use task_lab::domain::{AmountInput, JobDraft, JobId, ValidationError};
use task_lab::infrastructure::delivery::DownloadDelivery;
use task_lab::infrastructure::storage::InMemoryKeyValueStore;

use crate::helpers::{CountingKeyValueStore, FailingKeyValueStore, RecordingDelivery, job};

fn ledger(kv: Arc<dyn KeyValueStore>) -> LedgerService {
    let records = Arc::new(RecordStore::new(kv));
    let reporting = Arc::new(ReportingEngine::new(0.67, Arc::new(DownloadDelivery)));
    LedgerService::new(records, reporting)
}

fn draft(customer: &str, flat_rate: &str) -> JobDraft {
    JobDraft {
        customer: customer.to_string(),
        description: "Fix sink".to_string(),
        flat_rate: AmountInput::Text(flat_rate.to_string()),
        materials: None,
        miles: None,
    }
}

async fn seed(kv: &dyn KeyValueStore, jobs: &[task_lab::domain::Job]) {
    kv.set(JOBS_KEY, &serde_json::to_string(jobs).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn given_valid_draft_when_adding_then_job_is_persisted() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let ledger = ledger(kv.clone());

    let added = ledger.add_job(draft("Ann", "120")).await.unwrap();

    let jobs = ledger.list_jobs().await.unwrap();
    assert_eq!(jobs, vec![added]);
}

#[tokio::test]
async fn given_existing_jobs_when_adding_then_previous_jobs_are_kept() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    seed(kv.as_ref(), &[job("old", 1, 10.0, None, None)]).await;
    let ledger = ledger(kv);

    ledger.add_job(draft("Ann", "120")).await.unwrap();

    assert_eq!(ledger.list_jobs().await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_overflowing_optional_amount_when_adding_then_job_survives_reload() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let ledger = ledger(kv.clone());
    let mut entry = draft("Ann", "120");
    entry.materials = Some(AmountInput::Text("9".repeat(400)));
    entry.miles = Some(AmountInput::Text("9".repeat(400)));

    let added = ledger.add_job(entry).await.unwrap();

    assert_eq!(added.materials, Some(0.0));
    assert_eq!(ledger.list_jobs().await.unwrap(), vec![added]);
}

#[tokio::test]
async fn given_blank_customer_when_adding_then_store_is_never_written() {
    let kv = Arc::new(CountingKeyValueStore::default());
    let ledger = ledger(kv.clone());

    let result = ledger.add_job(draft("  ", "120")).await;

    assert!(matches!(
        result,
        Err(LedgerError::Validation(ValidationError::MissingCustomer))
    ));
    assert_eq!(kv.mutations(), 0);
    assert_eq!(kv.get(JOBS_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn given_non_positive_flat_rate_when_adding_then_store_is_never_written() {
    let kv = Arc::new(CountingKeyValueStore::default());
    seed(kv.as_ref(), &[job("keep", 1, 10.0, None, None)]).await;
    let before = kv.get(JOBS_KEY).await.unwrap();
    let ledger = ledger(kv.clone());

    let result = ledger.add_job(draft("Ann", "0")).await;

    assert!(matches!(
        result,
        Err(LedgerError::Validation(ValidationError::NonPositiveFlatRate))
    ));
    assert_eq!(kv.mutations(), 1);
    assert_eq!(kv.get(JOBS_KEY).await.unwrap(), before);
}

#[tokio::test]
async fn given_stored_jobs_in_any_order_when_listing_then_newest_first() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    seed(
        kv.as_ref(),
        &[
            job("middle", 2_000, 10.0, None, None),
            job("oldest", 1_000, 10.0, None, None),
            job("newest", 3_000, 10.0, None, None),
        ],
    )
    .await;
    let ledger = ledger(kv);

    let ids: Vec<String> = ledger
        .list_jobs()
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.id.to_string())
        .collect();

    assert_eq!(ids, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn given_jobs_with_missing_optionals_when_totalling_then_absent_counts_as_zero() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    seed(
        kv.as_ref(),
        &[
            job("a", 1, 200.0, Some(35.0), Some(12.5)),
            job("b", 2, 100.0, None, None),
            job("c", 3, 50.0, Some(5.0), None),
        ],
    )
    .await;
    let ledger = ledger(kv);

    let totals = ledger.totals().await.unwrap();

    assert_eq!(
        totals,
        JobTotals {
            count: 3,
            income: 350.0,
            materials: 40.0,
            miles: 12.5,
        }
    );
}

#[tokio::test]
async fn given_existing_id_when_getting_then_job_is_returned() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    seed(kv.as_ref(), &[job("a", 1, 200.0, Some(35.0), None)]).await;
    let ledger = ledger(kv);

    let found = ledger.get_job(&JobId::new("a")).await.unwrap().unwrap();

    assert_eq!(found.total(), 235.0);
    assert!(ledger.get_job(&JobId::new("zzz")).await.unwrap().is_none());
}

#[tokio::test]
async fn given_collection_when_deleting_one_then_others_are_unchanged() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    let a = job("a", 1, 10.0, Some(1.0), None);
    let b = job("b", 2, 20.0, None, Some(2.0));
    let c = job("c", 3, 30.0, None, None);
    seed(kv.as_ref(), &[a.clone(), b, c.clone()]).await;
    let ledger = ledger(kv);

    let removed = ledger.delete_job(&JobId::new("b")).await.unwrap();

    assert!(removed);
    assert_eq!(ledger.list_jobs().await.unwrap(), vec![c, a]);
}

#[tokio::test]
async fn given_unknown_id_when_deleting_then_returns_false_without_writing() {
    let kv = Arc::new(CountingKeyValueStore::default());
    seed(kv.as_ref(), &[job("a", 1, 10.0, None, None)]).await;
    let ledger = ledger(kv.clone());

    let removed = ledger.delete_job(&JobId::new("missing")).await.unwrap();

    assert!(!removed);
    assert_eq!(kv.mutations(), 1);
}

#[tokio::test]
async fn given_failing_store_when_adding_then_storage_error_surfaces() {
    let ledger = ledger(Arc::new(FailingKeyValueStore));

    let result = ledger.add_job(draft("Ann", "120")).await;

    assert!(matches!(result, Err(LedgerError::Store(_))));
}

#[tokio::test]
async fn given_stored_jobs_when_exporting_then_rows_are_newest_first() {
    let kv = Arc::new(InMemoryKeyValueStore::new());
    seed(
        kv.as_ref(),
        &[
            job("older", 1_000, 10.0, None, None),
            job("newer", 2_000, 20.0, None, None),
        ],
    )
    .await;
    let delivery = Arc::new(RecordingDelivery::default());
    let ledger = LedgerService::new(
        Arc::new(RecordStore::new(kv)),
        Arc::new(ReportingEngine::new(0.67, delivery.clone())),
    );

    ledger.export().await.unwrap();

    let delivered = delivery.delivered.lock().unwrap();
    let ids: Vec<&str> = delivered[0]
        .1
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, vec!["newer", "older"]);
}

#[tokio::test]
async fn given_download_delivery_when_exporting_then_content_matches_filename() {
    let ledger = ledger(Arc::new(InMemoryKeyValueStore::new()));

    let outcome = ledger.export().await.unwrap();

    match outcome.delivery {
        Delivery::Download(download) => {
            assert_eq!(download.filename, outcome.filename);
            assert!(download.content.starts_with("id,createdAt,date"));
        }
        other => panic!("expected download, got {:?}", other),
    }
}
