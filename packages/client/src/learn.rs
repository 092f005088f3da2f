//! Learn view: pick a language pair and a tag, then practice.

use learn_words_core::{unique_tags, Language, Practice, QuizSession, SessionError, Word};
use rand::Rng;

use crate::api::ApiClient;

pub struct LearnView {
    api: ApiClient,
    words: Vec<Word>,
    selected_tag: String,
    source: Language,
    target: Language,
    practice: Practice,
}

impl LearnView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            words: Vec::new(),
            selected_tag: String::new(),
            source: Language::English,
            target: Language::Finnish,
            practice: Practice::default(),
        }
    }

    pub async fn refresh(&mut self) {
        match self.api.get_all_words().await {
            Ok(words) => self.words = words,
            Err(err) => tracing::warn!(error = %err, "error fetching words"),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn tags(&self) -> Vec<String> {
        unique_tags(&self.words)
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    pub fn languages(&self) -> (Language, Language) {
        (self.source, self.target)
    }

    /// Selection is locked while practicing.
    pub fn select_tag(&mut self, tag: impl Into<String>) -> Result<(), SessionError> {
        if self.practice.is_practicing() {
            return Err(SessionError::AlreadyPracticing);
        }
        self.selected_tag = tag.into();
        Ok(())
    }

    pub fn select_languages(&mut self, source: Language, target: Language) -> Result<(), SessionError> {
        if self.practice.is_practicing() {
            return Err(SessionError::AlreadyPracticing);
        }
        self.source = source;
        self.target = target;
        Ok(())
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&QuizSession, SessionError> {
        self.practice
            .start(&self.words, &self.selected_tag, self.source, self.target, rng)
    }

    pub fn practice(&self) -> &Practice {
        &self.practice
    }

    pub fn practice_mut(&mut self) -> &mut Practice {
        &mut self.practice
    }

    pub fn stop(&mut self) -> Option<u32> {
        self.practice.stop()
    }
}
