//! Response Validator - acceptance contract for assistant text.
//!
//! Case-insensitive substring checks that decide whether a greeting or reply
//! belongs to an expected category. The scenario harness uses this as its oracle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category a piece of assistant text must fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    /// The fixed welcome line, with no mention of a name
    NeutralGreeting,
    /// Asks for a name in the context of an order or help
    NameRequestOrder,
    /// Does not ask for a name
    NoNameRequest,
    /// Greets a returning customer
    PersonalizedGreeting,
    /// Asks the customer what they are after
    IntentClarification,
    /// No constraint asserted
    Unconstrained,
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResponseCategory::NeutralGreeting => "neutral_greeting",
            ResponseCategory::NameRequestOrder => "name_request_order",
            ResponseCategory::NoNameRequest => "no_name_request",
            ResponseCategory::PersonalizedGreeting => "personalized_greeting",
            ResponseCategory::IntentClarification => "intent_clarification",
            ResponseCategory::Unconstrained => "unconstrained",
        };
        write!(f, "{}", label)
    }
}

impl ResponseCategory {
    /// Only the personalization check reads the greeting; every other category
    /// is checked against the reply.
    pub fn targets_greeting(&self) -> bool {
        matches!(self, ResponseCategory::PersonalizedGreeting)
    }
}

/// Checks assistant text against a `ResponseCategory`
#[derive(Debug, Clone)]
pub struct ResponseValidator {
    /// Lower-cased phrase that identifies the neutral greeting
    greeting_phrase: String,
}

impl ResponseValidator {
    /// Validator whose neutral greeting check looks for "welcome to <restaurant_name>"
    pub fn new(restaurant_name: &str) -> Self {
        Self {
            greeting_phrase: format!("welcome to {}", restaurant_name).to_lowercase(),
        }
    }

    /// Case-insensitive check that `text` falls into `category`
    pub fn matches(&self, text: &str, category: ResponseCategory) -> bool {
        let text = text.to_lowercase();
        let asks_name = text.contains("name");

        match category {
            ResponseCategory::NeutralGreeting => {
                text.contains(&self.greeting_phrase) && !asks_name
            }
            ResponseCategory::NameRequestOrder => {
                asks_name && (text.contains("order") || text.contains("help"))
            }
            ResponseCategory::NoNameRequest => !asks_name,
            ResponseCategory::PersonalizedGreeting => text.contains("welcome back"),
            ResponseCategory::IntentClarification => {
                text.contains("confirm") || text.contains("looking to")
            }
            ResponseCategory::Unconstrained => true,
        }
    }
}

impl Default for ResponseValidator {
    fn default() -> Self {
        Self::new(crate::dialogue::DEFAULT_RESTAURANT_NAME)
    }
}
