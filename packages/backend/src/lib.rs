pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::state::{ApiOptions, AppState};
use crate::store::{StoreResult, WordStore};

/// Opens the configured store and seeds it when enabled.
pub async fn init_state(config: &Config) -> StoreResult<AppState> {
    let store = WordStore::open(&config.database_url).await?;

    if config.seed_demo_words {
        if let Err(err) = seed::seed_demo_words(&store).await {
            tracing::warn!(error = %err, "failed to seed demo words");
        }
    }

    Ok(AppState::new(store, ApiOptions::from(config)))
}

pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
