use crate::config::Config;
use crate::source::SheetSource;

/// Shared by every worker; built once at startup.
pub struct AppState {
    pub config: Config,
    pub source: SheetSource,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            source: SheetSource::new(reqwest::Client::new()),
        }
    }
}
