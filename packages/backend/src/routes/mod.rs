mod words;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::response::AppError;
use crate::state::AppState;

pub const BANNER: &str = "Learn Words API";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root).fallback(fallback_handler))
        .route(
            "/api/words",
            get(words::list_words)
                .post(words::create_word)
                .fallback(fallback_handler),
        )
        .route(
            "/api/words/:key",
            get(words::list_words_by_tag)
                .put(words::update_word)
                .delete(words::delete_word)
                .fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .with_state(state)
}

async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, BANNER)
}

async fn fallback_handler() -> Response {
    AppError::not_found("Not found").into_response()
}
