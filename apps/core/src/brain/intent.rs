//! Intent Classification using keyword patterns.
//!
//! Fast keyword-based intent detection for restaurant ordering.
//! No ML model required - each keyword group is compiled into a single
//! literal alternation and matched against the lower-cased utterance.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use super::keywords::{KeywordGroup, KEYWORD_GROUPS};
use crate::error::AppError;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Customer wants to place a new order
    NewOrder,
    /// Customer wants to change an existing order
    ChangeOrder,
    /// Customer wants to cancel an existing order
    CancelOrder,
    /// Hours, location, menu questions
    GeneralInfo,
    /// Something went wrong and the customer is upset
    ComplaintUpset,
    /// Nothing matched
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the snake_case tag for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::NewOrder => "new_order",
            Intent::ChangeOrder => "change_order",
            Intent::CancelOrder => "cancel_order",
            Intent::GeneralInfo => "general_info",
            Intent::ComplaintUpset => "complaint_upset",
            Intent::Unknown => "unknown",
        }
    }

    /// Label with underscores replaced by spaces, for customer-facing text
    pub fn human_readable(&self) -> String {
        self.label().replace('_', " ")
    }

    /// Order intents cannot proceed until the customer's name is known
    pub fn requires_name(&self) -> bool {
        matches!(
            self,
            Intent::NewOrder | Intent::ChangeOrder | Intent::CancelOrder
        )
    }
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Detected intent
    pub intent: Intent,
    /// Keyword that decided the intent, if any
    pub matched_keyword: Option<String>,
}

impl IntentResult {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            matched_keyword: None,
        }
    }
}

/// Maps an utterance to an intent.
///
/// `DialogueResponder` only depends on this seam, so the keyword rules can be
/// replaced by a learned model without touching response selection.
pub trait Classifier {
    /// Classify a raw utterance. Must be total and deterministic.
    fn classify(&self, utterance: &str) -> Intent;
}

/// Compiled keyword group
#[derive(Debug, Clone)]
struct IntentPattern {
    intent: Intent,
    pattern: Regex,
}

/// Intent classifier using keyword patterns
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    patterns: Vec<IntentPattern>,
}

// Compile patterns once at startup
// Default tables are escaped literals, so compiling them cannot fail
static DEFAULT_PATTERNS: LazyLock<Vec<IntentPattern>> = LazyLock::new(|| {
    compile_groups(KEYWORD_GROUPS).expect("Invalid regex: default keyword groups")
});

fn compile_groups(groups: &[KeywordGroup]) -> Result<Vec<IntentPattern>, AppError> {
    groups
        .iter()
        .filter(|group| !group.keywords.is_empty())
        .map(|group| {
            let alternation = group
                .keywords
                .iter()
                .map(|k| regex::escape(&k.to_lowercase()))
                .collect::<Vec<_>>()
                .join("|");
            Ok(IntentPattern {
                intent: group.intent,
                pattern: Regex::new(&alternation)?,
            })
        })
        .collect()
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a new intent classifier with the default keyword groups
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }

    /// Create a classifier from custom keyword groups, highest precedence first
    pub fn from_groups(groups: &[KeywordGroup]) -> Result<Self, AppError> {
        Ok(Self {
            patterns: compile_groups(groups)?,
        })
    }

    /// Classify the intent of a text and report the keyword that fired.
    ///
    /// Matching is substring containment on the whole lower-cased input, so
    /// "together" still hits "get". The first matching group wins.
    pub fn analyze(&self, text: &str) -> IntentResult {
        let lowered = text.to_lowercase();

        for group in &self.patterns {
            if let Some(m) = group.pattern.find(&lowered) {
                debug!(intent = %group.intent, keyword = m.as_str(), "Intent matched");
                return IntentResult {
                    intent: group.intent,
                    matched_keyword: Some(m.as_str().to_string()),
                };
            }
        }

        debug!("No keyword matched, intent unknown");
        IntentResult::unknown()
    }
}

impl Classifier for IntentClassifier {
    fn classify(&self, utterance: &str) -> Intent {
        self.analyze(utterance).intent
    }
}
