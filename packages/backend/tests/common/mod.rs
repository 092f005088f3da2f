#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use learn_words_backend::config::{Config, TagMatch};
use learn_words_backend::create_app;
use learn_words_backend::state::{ApiOptions, AppState};
use learn_words_backend::store::WordStore;

pub struct TestApp {
    pub router: Router,
    pub store: WordStore,
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(ApiOptions::default(), true).await
}

pub async fn create_test_app_with(options: ApiOptions, seed: bool) -> TestApp {
    let config = Config {
        seed_demo_words: seed,
        empty_result_is_error: options.empty_result_is_error,
        tag_match: options.tag_match,
        ..Config::default()
    };
    let state: AppState = learn_words_backend::init_state(&config)
        .await
        .expect("in-memory store");
    let store = state.store().clone();

    TestApp {
        router: create_app(state),
        store,
    }
}

pub fn token_options() -> ApiOptions {
    ApiOptions {
        tag_match: TagMatch::Token,
        ..ApiOptions::default()
    }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
