use std::sync::Arc;

use finmock_core::config::AppConfig;
use finmock_core::fixtures::FixtureStore;
use finmock_core::session::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: SessionRegistry,
    pub fixtures: FixtureStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let fixtures = FixtureStore::new(config.data_dir.clone());
        AppState {
            config: Arc::new(config),
            sessions: SessionRegistry::new(),
            fixtures,
        }
    }
}
