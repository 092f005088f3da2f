//! Admin view: list, filter, add, edit and delete words.
//!
//! Every mutation is followed by a full re-fetch of the word list. Fetch
//! failures are only logged; mutation failures set a fixed message for the
//! user.

use learn_words_core::{filter_by_tag, unique_tags, Word, WordDraft};

use crate::api::ApiClient;

pub const ADD_ERROR: &str = "Error adding word. Please try again.";
pub const EDIT_ERROR: &str = "Error updating word. Please try again.";
pub const DELETE_ERROR: &str = "Error deleting word. Please try again.";

pub struct AdminView {
    api: ApiClient,
    words: Vec<Word>,
    selected_tag: String,
    error_message: Option<&'static str>,
}

impl AdminView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            words: Vec::new(),
            selected_tag: String::new(),
            error_message: None,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn find(&self, id: i64) -> Option<&Word> {
        self.words.iter().find(|word| word.id == id)
    }

    /// Words matching the selected tag, or all of them when none is selected.
    pub fn visible_words(&self) -> Vec<Word> {
        filter_by_tag(&self.words, &self.selected_tag)
    }

    pub fn tags(&self) -> Vec<String> {
        unique_tags(&self.words)
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selected_tag = tag.into();
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error_message
    }

    pub fn dismiss_error(&mut self) {
        self.error_message = None;
    }

    pub async fn refresh(&mut self) {
        match self.api.get_all_words().await {
            Ok(words) => {
                self.words = words;
                self.error_message = None;
            }
            Err(err) => tracing::warn!(error = %err, "error fetching words"),
        }
    }

    /// Returns whether the word was added.
    pub async fn add_word(&mut self, draft: &WordDraft) -> bool {
        match self.api.add_word(draft).await {
            Ok(message) => {
                tracing::info!(%message, "word added");
                self.refresh().await;
                self.error_message = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "error adding word");
                self.error_message = Some(ADD_ERROR);
                false
            }
        }
    }

    pub async fn edit_word(&mut self, id: i64, draft: &WordDraft) -> bool {
        match self.api.update_word(id, draft).await {
            Ok(message) => {
                tracing::info!(%message, "word updated");
                self.refresh().await;
                self.error_message = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, id, "error updating word");
                self.error_message = Some(EDIT_ERROR);
                false
            }
        }
    }

    pub async fn delete_word(&mut self, id: i64) -> bool {
        match self.api.delete_word(id).await {
            Ok(message) => {
                tracing::info!(%message, "word deleted");
                self.refresh().await;
                self.error_message = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, id, "error deleting word");
                self.error_message = Some(DELETE_ERROR);
                false
            }
        }
    }
}
