use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use learn_words_core::{Tags, Word, WordDraft};
use serde::Deserialize;

use crate::config::TagMatch;
use crate::response::{AppError, MessageResponse};
use crate::state::AppState;

/// Body of `POST /api/words` and `PUT /api/words/:id`. Translations are
/// optional here so that a missing field produces a validation message
/// rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct WordPayload {
    english: Option<String>,
    finnish: Option<String>,
    swedish: Option<String>,
    #[serde(default)]
    tags: Tags,
}

impl WordPayload {
    fn into_draft(self) -> Result<WordDraft, AppError> {
        Ok(WordDraft {
            english: required(self.english, "English")?,
            finnish: required(self.finnish, "Finnish")?,
            swedish: required(self.swedish, "Swedish")?,
            tags: self.tags,
        })
    }
}

fn required(value: Option<String>, language: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            let message = format!("{language} translation is required");
            tracing::warn!("{message}");
            Err(AppError::validation(message))
        }
    }
}

fn parse_payload(payload: Result<Json<WordPayload>, JsonRejection>) -> Result<WordDraft, AppError> {
    match payload {
        Ok(Json(payload)) => payload.into_draft(),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "rejected word payload");
            Err(AppError::validation("Invalid request body"))
        }
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::warn!(id = raw, "word id is not an integer");
        AppError::validation(format!("Invalid word id {raw}"))
    })
}

pub async fn list_words(State(state): State<AppState>) -> Result<Json<Vec<Word>>, AppError> {
    let words = state
        .store()
        .list_all()
        .await
        .map_err(|err| AppError::store("Error receiving all words", &err))?;

    if words.is_empty() && state.options().empty_result_is_error {
        return Err(AppError::empty_result("No words found in the database"));
    }

    Ok(Json(words))
}

pub async fn list_words_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Word>>, AppError> {
    let options = state.options();
    let result = match options.tag_match {
        TagMatch::Exact => state.store().list_by_tag(&tag).await,
        TagMatch::Token => state.store().list_tagged(&tag).await,
    };
    let words = result.map_err(|err| AppError::store("Error receiving words by tag", &err))?;

    if words.is_empty() && options.empty_result_is_error {
        return Err(AppError::empty_result(format!("No words found with tag {tag}")));
    }

    Ok(Json(words))
}

pub async fn create_word(
    State(state): State<AppState>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<MessageResponse, AppError> {
    let draft = parse_payload(payload)?;

    let word = state
        .store()
        .add(&draft)
        .await
        .map_err(|err| AppError::store("Error adding the word", &err))?;

    tracing::info!(id = word.id, english = %word.english, "word added");
    Ok(MessageResponse::new("Word added"))
}

pub async fn update_word(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<WordPayload>, JsonRejection>,
) -> Result<MessageResponse, AppError> {
    let id = parse_id(&key)?;
    let draft = parse_payload(payload)?;

    let updated = state
        .store()
        .update(id, &draft)
        .await
        .map_err(|err| AppError::store("Error updating the word", &err))?;

    if updated {
        tracing::info!(id, "word updated");
    } else {
        tracing::debug!(id, "update matched no word");
    }
    Ok(MessageResponse::new(format!("Word with id {id} updated")))
}

pub async fn delete_word(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<MessageResponse, AppError> {
    let id = parse_id(&key)?;

    let deleted = state
        .store()
        .delete_by_id(id)
        .await
        .map_err(|err| AppError::store("Error deleting the word", &err))?;

    if deleted {
        tracing::info!(id, "word deleted");
    } else {
        tracing::debug!(id, "delete matched no word");
    }
    Ok(MessageResponse::new(format!("Word with id {id} deleted")))
}
