use std::sync::Arc;

use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}
