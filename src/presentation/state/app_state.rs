use std::sync::Arc;

use crate::application::services::{LedgerService, PinService};

#[derive(Clone)]
pub struct AppState {
    pub ledger_service: Arc<LedgerService>,
    pub pin_service: Arc<PinService>,
}
