//! Application state shared across all handlers.

use crate::config::Config;

/// Application state shared across handlers.
///
/// The demo endpoints are stateless; the state carries the runtime
/// configuration so the router layers can read it.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
