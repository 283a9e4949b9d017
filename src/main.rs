use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use task_lab::application::services::{LedgerService, PinService, RecordStore, ReportingEngine};
use task_lab::infrastructure::delivery::DeliveryStrategyFactory;
use task_lab::infrastructure::observability::{TracingConfig, init_tracing};
use task_lab::infrastructure::storage::KeyValueStoreFactory;
use task_lab::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    init_tracing(
        &TracingConfig::from_settings(environment.as_str(), &settings.logging),
        addr,
    );

    let store = KeyValueStoreFactory::create(&settings.storage)?;
    let records = Arc::new(RecordStore::new(store));

    let delivery = DeliveryStrategyFactory::create(&settings.export);
    let reporting = Arc::new(ReportingEngine::new(
        settings.reporting.mileage_rate,
        delivery,
    ));

    tracing::info!(
        mileage_rate = reporting.mileage_rate(),
        "Reporting engine configured"
    );

    let state = AppState {
        ledger_service: Arc::new(LedgerService::new(Arc::clone(&records), reporting)),
        pin_service: Arc::new(PinService::new(records)),
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
