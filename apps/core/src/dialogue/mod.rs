//! # Dialogue Module
//!
//! Turns classified intents into the assistant's replies.
//!
//! ## Components
//! - `session`: Per-conversation state and name capture
//! - `responder`: Greeting, name gating and reply selection
//! - `handoff`: Routing to order, menu and complaint systems

pub mod handoff;
pub mod responder;
pub mod session;

pub use handoff::{Collaborator, Handoff};
pub use responder::{name_prompt, DialogueResponder, DEFAULT_RESTAURANT_NAME};
pub use session::{KnownCustomer, Session};
