use crate::config::{Config, TagMatch};
use crate::store::WordStore;

/// Behaviour switches of the word API.
#[derive(Debug, Clone, Copy)]
pub struct ApiOptions {
    pub empty_result_is_error: bool,
    pub tag_match: TagMatch,
}

impl Default for ApiOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ApiOptions {
    fn from(config: &Config) -> Self {
        Self {
            empty_result_is_error: config.empty_result_is_error,
            tag_match: config.tag_match,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    store: WordStore,
    options: ApiOptions,
}

impl AppState {
    pub fn new(store: WordStore, options: ApiOptions) -> Self {
        Self { store, options }
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn options(&self) -> ApiOptions {
        self.options
    }
}
