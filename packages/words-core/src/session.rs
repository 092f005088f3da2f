//! Quiz session state machine
//!
//! A practice session walks a shuffled working set of words. The learner
//! sees the source-language text, types the target-language text and gets
//! one point per word answered correctly on the first attempt.
//!
//! ```text
//!            start                      stop
//!   Idle ─────────────► Practicing ─────────────► Idle
//!
//!   per position:  Unanswered ──submit──► Correct | Incorrect
//!                  Incorrect ──retry──► Unanswered   (has_retried stays set)
//!                  Correct | Incorrect ──advance──► Unanswered at next position
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shuffle::shuffle;
use crate::tags::filter_by_tag;
use crate::types::{Language, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attempt {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl Attempt {
    pub fn is_checked(self) -> bool {
        !matches!(self, Attempt::Unanswered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no practice session is running")]
    NotPracticing,
    #[error("a practice session is already running")]
    AlreadyPracticing,
    #[error("there are no words to practice")]
    NothingToPractice,
    #[error("the answer has not been checked yet")]
    NotChecked,
    #[error("only an incorrect answer can be retried")]
    NotIncorrect,
}

/// State of one running practice session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    working_set: Vec<Word>,
    position: usize,
    source: Language,
    target: Language,
    attempt: Attempt,
    has_retried: bool,
    score: u32,
    input: String,
}

impl QuizSession {
    /// Filters `words` by `tag` and shuffles the result into the working set.
    pub fn new<R: Rng + ?Sized>(
        words: &[Word],
        tag: &str,
        source: Language,
        target: Language,
        rng: &mut R,
    ) -> Self {
        let working_set = shuffle(&filter_by_tag(words, tag), rng);
        Self::from_working_set(working_set, source, target)
    }

    /// Uses `working_set` in the given order.
    pub fn from_working_set(working_set: Vec<Word>, source: Language, target: Language) -> Self {
        Self {
            working_set,
            position: 0,
            source,
            target,
            attempt: Attempt::Unanswered,
            has_retried: false,
            score: 0,
            input: String::new(),
        }
    }

    pub fn working_set(&self) -> &[Word] {
        &self.working_set
    }

    pub fn len(&self) -> usize {
        self.working_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working_set.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    pub fn attempt(&self) -> Attempt {
        self.attempt
    }

    pub fn has_retried(&self) -> bool {
        self.has_retried
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// `None` when the working set is empty.
    pub fn current_word(&self) -> Option<&Word> {
        self.working_set.get(self.position)
    }

    /// Text the learner is asked to translate.
    pub fn prompt(&self) -> Option<&str> {
        self.current_word().map(|word| word.translation(self.source))
    }

    /// Text the learner is expected to type.
    pub fn expected_answer(&self) -> Option<&str> {
        self.current_word().map(|word| word.translation(self.target))
    }

    /// Checks `input` against the current word, ignoring case.
    ///
    /// Scores only when this is the first submission for the position.
    pub fn submit_answer(&mut self, input: &str) -> Result<Attempt, SessionError> {
        let expected = self
            .expected_answer()
            .ok_or(SessionError::NothingToPractice)?;
        let correct = expected.to_lowercase() == input.to_lowercase();

        self.input = input.to_string();
        if correct {
            self.attempt = Attempt::Correct;
            if !self.has_retried {
                self.score += 1;
            }
        } else {
            self.attempt = Attempt::Incorrect;
        }
        self.has_retried = true;

        Ok(self.attempt)
    }

    /// Clears the input after an incorrect answer so the same word can be
    /// tried again. A later correct answer does not score.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        if self.attempt != Attempt::Incorrect {
            return Err(SessionError::NotIncorrect);
        }
        self.input.clear();
        self.attempt = Attempt::Unanswered;
        self.has_retried = true;
        Ok(())
    }

    /// Moves to the next word, wrapping to the start. Returns the new position.
    pub fn advance(&mut self) -> Result<usize, SessionError> {
        if self.working_set.is_empty() {
            return Err(SessionError::NothingToPractice);
        }
        if !self.attempt.is_checked() {
            return Err(SessionError::NotChecked);
        }
        self.position = (self.position + 1) % self.working_set.len();
        self.attempt = Attempt::Unanswered;
        self.has_retried = false;
        self.input.clear();
        Ok(self.position)
    }
}

/// Top-level Learn state: idle, or running a [`QuizSession`].
#[derive(Debug, Clone, Default)]
pub struct Practice {
    session: Option<QuizSession>,
}

impl Practice {
    pub fn is_practicing(&self) -> bool {
        self.session.is_some()
    }

    /// `None` while idle.
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    fn session_mut(&mut self) -> Result<&mut QuizSession, SessionError> {
        self.session.as_mut().ok_or(SessionError::NotPracticing)
    }

    pub fn start<R: Rng + ?Sized>(
        &mut self,
        words: &[Word],
        tag: &str,
        source: Language,
        target: Language,
        rng: &mut R,
    ) -> Result<&QuizSession, SessionError> {
        if self.is_practicing() {
            return Err(SessionError::AlreadyPracticing);
        }
        let session = QuizSession::new(words, tag, source, target, rng);
        Ok(self.session.insert(session))
    }

    /// Ends the session and returns its final score.
    pub fn stop(&mut self) -> Option<u32> {
        self.session.take().map(|session| session.score())
    }

    pub fn submit_answer(&mut self, input: &str) -> Result<Attempt, SessionError> {
        self.session_mut()?.submit_answer(input)
    }

    pub fn retry(&mut self) -> Result<(), SessionError> {
        self.session_mut()?.retry()
    }

    pub fn advance(&mut self) -> Result<usize, SessionError> {
        self.session_mut()?.advance()
    }
}
