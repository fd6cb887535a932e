//! D's Kitchen intent detection node.
//!
//! Classifies a customer utterance by keyword, decides whether the
//! customer's name must be collected first, and picks the next line of
//! the conversation. A scenario harness checks the whole flow.

pub mod brain;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod harness;
pub mod logging;
pub mod validator;

#[cfg(test)]
mod tests;

pub use brain::{Classifier, Intent, IntentClassifier};
pub use config::AppConfig;
pub use dialogue::{DialogueResponder, Session};
pub use error::AppError;
pub use harness::{builtin_scenarios, HarnessReport, TestHarness};
pub use validator::{ResponseCategory, ResponseValidator};
