//! Keyword tables for rule-based intent detection.
//!
//! Groups are listed in precedence order. The classifier walks them top to
//! bottom and stops at the first group with a keyword contained anywhere in
//! the lower-cased utterance, so an utterance mentioning both "order" and
//! "problem" lands on `NewOrder`.

use super::intent::Intent;

/// A set of lower-case keywords that map to one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordGroup {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

pub const NEW_ORDER_KEYWORDS: &[&str] = &["order", "get", "want", "pizza", "burger"];
pub const CHANGE_ORDER_KEYWORDS: &[&str] = &["change", "modify", "update"];
pub const CANCEL_ORDER_KEYWORDS: &[&str] = &["cancel", "remove"];
pub const GENERAL_INFO_KEYWORDS: &[&str] = &["hours", "open", "location", "menu", "info"];
pub const COMPLAINT_KEYWORDS: &[&str] = &["complaint", "wrong", "problem", "issue"];

/// Default keyword groups, highest precedence first
pub const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        intent: Intent::NewOrder,
        keywords: NEW_ORDER_KEYWORDS,
    },
    KeywordGroup {
        intent: Intent::ChangeOrder,
        keywords: CHANGE_ORDER_KEYWORDS,
    },
    KeywordGroup {
        intent: Intent::CancelOrder,
        keywords: CANCEL_ORDER_KEYWORDS,
    },
    KeywordGroup {
        intent: Intent::GeneralInfo,
        keywords: GENERAL_INFO_KEYWORDS,
    },
    KeywordGroup {
        intent: Intent::ComplaintUpset,
        keywords: COMPLAINT_KEYWORDS,
    },
];
