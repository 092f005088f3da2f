//! # learn-words-core
//!
//! Client-side logic of the Learn Words flashcards, free of any I/O:
//!
//! - [`types`] - the [`Word`] record, its [`Tags`] label set and [`Language`]
//! - [`tags`] - distinct-label listing and label filtering
//! - [`shuffle`] - Fisher-Yates shuffle
//! - [`session`] - the practice/quiz state machine
//!
//! ```rust
//! use learn_words_core::{Language, Practice, WordDraft};
//!
//! let words = vec![WordDraft::new("dog", "koira", "hund", "animals").with_id(1)];
//! let mut practice = Practice::default();
//! practice
//!     .start(&words, "animals", Language::English, Language::Finnish, &mut rand::rng())
//!     .unwrap();
//! practice.submit_answer("Koira").unwrap();
//! assert_eq!(practice.stop(), Some(1));
//! ```

pub mod session;
pub mod shuffle;
pub mod tags;
pub mod types;

pub use session::{Attempt, Practice, QuizSession, SessionError};
pub use shuffle::shuffle;
pub use tags::{filter_by_tag, unique_tags};
pub use types::{Language, Tags, UnknownLanguage, Word, WordDraft};
