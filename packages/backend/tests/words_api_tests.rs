use axum::http::{Method, StatusCode};
use learn_words_core::Word;
use serde_json::json;

mod common;

use common::{create_test_app, create_test_app_with, token_options};
use learn_words_backend::state::ApiOptions;

fn words(value: serde_json::Value) -> Vec<Word> {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let app = create_test_app().await;
    let (status, body) = app.send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Learn Words API");
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let app = create_test_app().await;
    let (status, body) = app.send_json(Method::GET, "/nonexistent/path", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_unsupported_method_is_json_404() {
    let app = create_test_app().await;
    let (status, body) = app.send_json(Method::PATCH, "/api/words/1", Some("{}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_list_seeded_words_in_id_order() {
    let app = create_test_app().await;
    let (status, body) = app.send_json(Method::GET, "/api/words", None).await;

    assert_eq!(status, StatusCode::OK);
    let list = words(body);
    assert_eq!(list.len(), 18);
    assert!(list.windows(2).all(|pair| pair[0].id < pair[1].id));
    assert_eq!(list[0].english, "dog");
    assert_eq!(list[0].tags.as_str(), "animals");
}

#[tokio::test]
async fn test_word_json_shape() {
    let app = create_test_app().await;
    let (_, body) = app.send_json(Method::GET, "/api/words/colors", None).await;

    let first = &body[0];
    assert!(first["id"].is_i64());
    assert_eq!(first["english"], "red");
    assert_eq!(first["finnish"], "punainen");
    assert_eq!(first["swedish"], "röd");
    assert_eq!(first["tags"], "colors");
}

#[tokio::test]
async fn test_add_then_list_round_trip() {
    let app = create_test_app_with(ApiOptions::default(), false).await;
    let input = json!({
        "english": "apple",
        "finnish": "omena",
        "swedish": "äpple",
        "tags": "food, fruit"
    });

    let (status, body) = app
        .send_json(Method::POST, "/api/words", Some(&input.to_string()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Word added" }));

    let (_, body) = app.send_json(Method::GET, "/api/words", None).await;
    let list = words(body);
    assert_eq!(list.len(), 1);
    let row = serde_json::to_value(&list[0]).unwrap();
    assert_eq!(row["english"], input["english"]);
    assert_eq!(row["finnish"], input["finnish"]);
    assert_eq!(row["swedish"], input["swedish"]);
    assert_eq!(row["tags"], input["tags"]);
}

#[tokio::test]
async fn test_add_with_empty_english_is_rejected() {
    let app = create_test_app_with(ApiOptions::default(), false).await;
    let payload = r#"{"english":"","finnish":"omena","swedish":"äpple","tags":"food"}"#;

    let (status, body) = app.send_json(Method::POST, "/api/words", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "English translation is required" }));
    assert_eq!(app.store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_missing_swedish_is_rejected() {
    let app = create_test_app().await;
    let payload = r#"{"english":"apple","finnish":"omena"}"#;

    let (status, body) = app.send_json(Method::POST, "/api/words", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Swedish translation is required");
    assert_eq!(app.store.count().await.unwrap(), 18);
}

#[tokio::test]
async fn test_add_with_malformed_body_is_rejected() {
    let app = create_test_app().await;
    let (status, body) = app.send_json(Method::POST, "/api/words", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_add_without_tags_stores_untagged_word() {
    let app = create_test_app_with(ApiOptions::default(), false).await;
    let payload = r#"{"english":"milk","finnish":"maito","swedish":"mjölk"}"#;

    let (status, _) = app.send_json(Method::POST, "/api/words", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send_json(Method::GET, "/api/words", None).await;
    assert_eq!(body[0]["tags"], "");
}

#[tokio::test]
async fn test_update_word() {
    let app = create_test_app().await;
    let payload = r#"{"english":"puppy","finnish":"pentu","swedish":"valp","tags":"animals"}"#;

    let (status, body) = app.send_json(Method::PUT, "/api/words/1", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Word with id 1 updated" }));

    let (_, body) = app.send_json(Method::GET, "/api/words", None).await;
    let list = words(body);
    assert_eq!(list[0].id, 1);
    assert_eq!(list[0].english, "puppy");
    assert_eq!(list[0].finnish, "pentu");
    assert_eq!(list[0].swedish, "valp");
}

#[tokio::test]
async fn test_update_requires_translations() {
    let app = create_test_app().await;
    let payload = r#"{"english":"puppy","swedish":"valp"}"#;

    let (status, body) = app.send_json(Method::PUT, "/api/words/1", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Finnish translation is required");

    let (_, body) = app.send_json(Method::GET, "/api/words", None).await;
    assert_eq!(body[0]["english"], "dog");
}

#[tokio::test]
async fn test_update_missing_id_is_not_an_error() {
    let app = create_test_app().await;
    let payload = r#"{"english":"a","finnish":"b","swedish":"c"}"#;

    let (status, body) = app.send_json(Method::PUT, "/api/words/999", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Word with id 999 updated");
    assert_eq!(app.store.count().await.unwrap(), 18);
}

#[tokio::test]
async fn test_delete_word() {
    let app = create_test_app().await;

    let (status, body) = app.send_json(Method::DELETE, "/api/words/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Word with id 2 deleted" }));

    let (_, body) = app.send_json(Method::GET, "/api/words", None).await;
    let list = words(body);
    assert_eq!(list.len(), 17);
    assert!(list.iter().all(|w| w.id != 2));

    // Deleting again is a no-op.
    let (status, _) = app.send_json(Method::DELETE, "/api/words/2", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_non_integer_id_is_rejected() {
    let app = create_test_app().await;

    let (status, body) = app.send_json(Method::DELETE, "/api/words/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid word id abc");
}

#[tokio::test]
async fn test_list_by_tag_is_exact_by_default() {
    let app = create_test_app().await;
    let payload = r#"{"english":"hen","finnish":"kana","swedish":"höna","tags":"animals, farm"}"#;
    app.send_json(Method::POST, "/api/words", Some(payload)).await;

    let (status, body) = app.send_json(Method::GET, "/api/words/animals", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = words(body);
    assert_eq!(list.len(), 6);
    assert!(list.iter().all(|w| w.tags.as_str() == "animals"));

    let (_, body) = app
        .send_json(Method::GET, "/api/words/animals,%20farm", None)
        .await;
    let list = words(body);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].english, "hen");
}

#[tokio::test]
async fn test_list_by_tag_token_mode() {
    let app = create_test_app_with(token_options(), true).await;
    let payload = r#"{"english":"hen","finnish":"kana","swedish":"höna","tags":"animals, farm"}"#;
    app.send_json(Method::POST, "/api/words", Some(payload)).await;

    let (_, body) = app.send_json(Method::GET, "/api/words/animals", None).await;
    assert_eq!(words(body).len(), 7);

    let (_, body) = app.send_json(Method::GET, "/api/words/farm", None).await;
    let list = words(body);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].english, "hen");
}

#[tokio::test]
async fn test_empty_results_are_errors_by_default() {
    let app = create_test_app_with(ApiOptions::default(), false).await;

    let (status, body) = app.send_json(Method::GET, "/api/words", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No words found in the database" }));

    let (status, body) = app.send_json(Method::GET, "/api/words/fruit", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "No words found with tag fruit" }));
}

#[tokio::test]
async fn test_no_match_on_seeded_store_is_an_error_by_default() {
    let app = create_test_app().await;

    let (status, body) = app.send_json(Method::GET, "/api/words/animals,%20farm", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "No words found with tag animals, farm");
}

#[tokio::test]
async fn test_empty_results_as_arrays_when_disabled() {
    let options = ApiOptions {
        empty_result_is_error: false,
        ..ApiOptions::default()
    };
    let app = create_test_app_with(options, false).await;

    let (status, body) = app.send_json(Method::GET, "/api/words", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = app.send_json(Method::GET, "/api/words/fruit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_closed_store_surfaces_500() {
    let app = create_test_app().await;
    app.store.close().await;

    let (status, body) = app.send_json(Method::GET, "/api/words", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error receiving all words" }));

    let payload = r#"{"english":"a","finnish":"b","swedish":"c"}"#;
    let (status, body) = app.send_json(Method::POST, "/api/words", Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error adding the word");
}
