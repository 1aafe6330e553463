pub mod store;

use shared_config::AppConfig;
use store::StoreClient;

/// Process-wide state: configuration plus the single long-lived store
/// client, constructed once at startup and shared with every handler.
pub struct AppState {
    pub config: AppConfig,
    pub store: StoreClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = StoreClient::new(&config);
        Self { config, store }
    }
}
