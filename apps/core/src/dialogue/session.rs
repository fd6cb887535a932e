//! Per-conversation state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::brain::Intent;
use crate::error::AppError;

/// A customer whose name is known to the assistant.
///
/// Being a returning customer implies a known name, so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownCustomer {
    pub name: String,
    /// Seen in a previous conversation; unlocks the personalized greeting
    pub returning: bool,
}

impl KnownCustomer {
    /// Customer on file from a previous conversation
    pub fn returning(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returning: true,
        }
    }

    /// Customer who gave their name in this conversation
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returning: false,
        }
    }

    /// A blank or whitespace-only name counts as no name at all
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Mutable state of one conversation, owned by exactly one handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub customer: Option<KnownCustomer>,
    /// Classification of the most recent utterance, unset until the first turn
    pub current_intent: Option<Intent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Session {
    /// A session for a customer we know nothing about
    pub fn fresh() -> Self {
        Self::with_customer(None)
    }

    /// A session for a returning customer whose name is on file
    pub fn returning(name: impl Into<String>) -> Self {
        Self::with_customer(Some(KnownCustomer::returning(name)))
    }

    /// A session starting from the given customer; a nameless customer is dropped
    pub fn with_customer(customer: Option<KnownCustomer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer: customer.filter(KnownCustomer::has_name),
            current_intent: None,
        }
    }

    /// Return to a starting state, as if a new conversation had begun.
    pub fn reset(&mut self, customer: Option<KnownCustomer>) {
        self.id = Uuid::new_v4();
        self.customer = customer.filter(KnownCustomer::has_name);
        self.current_intent = None;
    }

    /// The customer, if one with a usable name is known
    pub fn known_customer(&self) -> Option<&KnownCustomer> {
        self.customer.as_ref().filter(|c| c.has_name())
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.known_customer().map(|c| c.name.as_str())
    }

    pub fn is_returning(&self) -> bool {
        self.known_customer().is_some_and(|c| c.returning)
    }

    /// Capture the customer's name once they give it.
    ///
    /// Keeps the returning flag of an already known customer.
    pub fn record_name(&mut self, name: &str) -> Result<(), AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Customer name cannot be empty".to_string(),
            ));
        }

        match self.customer.as_mut() {
            Some(customer) => customer.name = name.to_string(),
            None => self.customer = Some(KnownCustomer::new(name)),
        }
        Ok(())
    }
}
