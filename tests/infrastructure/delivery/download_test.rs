use task_lab::application::ports::{Delivery, DeliveryStrategy};
use task_lab::infrastructure::delivery::{CSV_DOWNLOAD_CONTENT_TYPE, DownloadDelivery};

#[tokio::test]
async fn given_csv_when_delivering_as_download_then_content_is_packaged() {
    let delivery = DownloadDelivery;

    let result = delivery
        .deliver("task-lab-jobs-2024-03-01.csv", "id,createdAt".to_string())
        .await
        .unwrap();

    match result {
        Delivery::Download(download) => {
            assert_eq!(download.filename, "task-lab-jobs-2024-03-01.csv");
            assert_eq!(download.content_type, CSV_DOWNLOAD_CONTENT_TYPE);
            assert_eq!(download.content, "id,createdAt");
        }
        other => panic!("expected download, got {:?}", other),
    }
}
