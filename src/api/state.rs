//! Shared state of the pay slip API.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// State handed to every handler.
///
/// Cloning is cheap: all clones point at the same immutable payroll year
/// configuration, which requests read concurrently without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Wraps a payroll configuration for sharing across requests.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the payroll configuration applied to every request.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns a new handle on the shared configuration.
    pub fn shared_config(&self) -> Arc<PayrollConfig> {
        Arc::clone(&self.config)
    }
}

impl From<ConfigLoader> for AppState {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::from(ConfigLoader::load("./config/fr2024").unwrap())
    }

    #[test]
    fn test_clones_share_one_configuration() {
        let state = state();
        let clone = state.clone();

        assert!(Arc::ptr_eq(&state.shared_config(), &clone.shared_config()));
    }

    #[test]
    fn test_state_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<AppState>();
    }

    #[test]
    fn test_config_is_the_loaded_year() {
        assert_eq!(state().config().year().code, "fr2024");
    }
}
