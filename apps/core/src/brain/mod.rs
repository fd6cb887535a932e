//! # Brain Module
//!
//! Fast, non-LLM intent detection for the ordering assistant.
//! Runs on every utterance before a response is selected.
//!
//! ## Components
//! - `intent`: Intent classification using keyword patterns
//! - `keywords`: Keyword tables in precedence order

pub mod intent;
pub mod keywords;

pub use intent::{Classifier, Intent, IntentClassifier, IntentResult};
pub use keywords::{KeywordGroup, KEYWORD_GROUPS};
