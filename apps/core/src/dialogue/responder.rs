//! Dialogue Responder - greeting, name gating and reply selection.
//!
//! Each turn:
//! 1. Classify the utterance and remember the intent on the session
//! 2. Ask for clarification when nothing matched
//! 3. Ask for the customer's name when an order intent arrives without one
//! 4. Otherwise acknowledge the intent

use tracing::info;

use super::handoff::{Collaborator, Handoff};
use super::session::Session;
use crate::brain::{Classifier, Intent, IntentClassifier};

pub const DEFAULT_RESTAURANT_NAME: &str = "D's Kitchen";

pub const CLARIFICATION_PROMPT: &str = "Just to confirm: are you looking to place a new order, \
     ask a question about our menu, or something else?";

pub const NEW_ORDER_NAME_PROMPT: &str =
    "I'd be happy to help you place an order. Could I get your name for the order?";

pub const EXISTING_ORDER_NAME_PROMPT: &str =
    "I can help you with your order. What name is the order under?";

/// Name-collection prompt for intents that need one.
///
/// Change and cancel share wording since both need the existing order's owner.
pub fn name_prompt(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::NewOrder => Some(NEW_ORDER_NAME_PROMPT),
        Intent::ChangeOrder | Intent::CancelOrder => Some(EXISTING_ORDER_NAME_PROMPT),
        _ => None,
    }
}

/// Produces the assistant's side of the conversation
#[derive(Debug, Clone)]
pub struct DialogueResponder<C: Classifier = IntentClassifier> {
    classifier: C,
    restaurant_name: String,
}

impl Default for DialogueResponder {
    fn default() -> Self {
        Self::new(IntentClassifier::new(), DEFAULT_RESTAURANT_NAME)
    }
}

impl<C: Classifier> DialogueResponder<C> {
    /// Create a responder that classifies with `classifier` and greets on behalf of `restaurant_name`
    pub fn new(classifier: C, restaurant_name: impl Into<String>) -> Self {
        Self {
            classifier,
            restaurant_name: restaurant_name.into(),
        }
    }

    /// Name used in the neutral greeting
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    /// Greeting that never mentions a name
    pub fn neutral_greeting(&self) -> String {
        format!(
            "Welcome to {}. How can I help you today?",
            self.restaurant_name
        )
    }

    /// Opening line for a session. Personalized only for returning customers.
    pub fn greet(&self, session: &Session) -> String {
        match session.known_customer() {
            Some(customer) if customer.returning => {
                format!("Welcome back, {}. How can I help today?", customer.name)
            }
            _ => self.neutral_greeting(),
        }
    }

    /// Handle one customer utterance and return the reply.
    ///
    /// Always records the classified intent on the session, even when the
    /// reply is a prompt rather than an acknowledgement.
    pub fn respond(&self, session: &mut Session, utterance: &str) -> String {
        let intent = self.classifier.classify(utterance);
        session.current_intent = Some(intent);

        let name_known = session.customer_name().is_some();
        info!(
            session_id = %session.id,
            intent = %intent,
            name_known,
            "Processing customer utterance"
        );

        if intent == Intent::Unknown {
            return CLARIFICATION_PROMPT.to_string();
        }

        if intent.requires_name() && !name_known {
            if let Some(prompt) = name_prompt(intent) {
                return prompt.to_string();
            }
        }

        format!("Great! I can help you with {}.", intent.human_readable())
    }

    /// Work ready for a collaborator after the latest turn.
    ///
    /// Order intents are held back until the name gate is passed.
    pub fn handoff(&self, session: &Session) -> Option<Handoff> {
        let intent = session.current_intent?;
        let collaborator = Collaborator::for_intent(intent)?;
        let customer_name = session.customer_name().map(str::to_string);

        if intent.requires_name() && customer_name.is_none() {
            return None;
        }

        Some(Handoff {
            collaborator,
            intent,
            customer_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::KnownCustomer;

    struct FixedClassifier(Intent);

    impl Classifier for FixedClassifier {
        fn classify(&self, _utterance: &str) -> Intent {
            self.0
        }
    }

    #[test]
    fn test_neutral_greeting_for_fresh_session() {
        let responder: DialogueResponder = DialogueResponder::default();
        let greeting = responder.greet(&Session::fresh());

        assert_eq!(greeting, "Welcome to D's Kitchen. How can I help you today?");
        assert!(!greeting.to_lowercase().contains("name"));
    }

    #[test]
    fn test_personalized_greeting_for_returning_customer() {
        let responder: DialogueResponder = DialogueResponder::default();
        let greeting = responder.greet(&Session::returning("John"));

        assert_eq!(greeting, "Welcome back, John. How can I help today?");
    }

    #[test]
    fn test_known_but_new_customer_gets_neutral_greeting() {
        let responder: DialogueResponder = DialogueResponder::default();
        let session = Session::with_customer(Some(KnownCustomer::new("Ana")));

        assert_eq!(responder.greet(&session), responder.neutral_greeting());
    }

    #[test]
    fn test_blank_returning_name_gets_neutral_greeting_and_name_request() {
        let responder: DialogueResponder = DialogueResponder::default();
        let mut session = Session::fresh();
        session.customer = Some(KnownCustomer::returning(""));

        assert_eq!(responder.greet(&session), responder.neutral_greeting());
        assert_eq!(responder.respond(&mut session, "I want a pizza"), NEW_ORDER_NAME_PROMPT);
        assert_eq!(responder.handoff(&session), None);
    }

    #[test]
    fn test_blank_known_name_still_asks_for_name() {
        let responder: DialogueResponder = DialogueResponder::default();
        let mut session = Session::fresh();
        session.customer = Some(KnownCustomer::new("  "));

        assert_eq!(responder.respond(&mut session, "cancel it"), EXISTING_ORDER_NAME_PROMPT);
    }

    #[test]
    fn test_respond_uses_injected_classifier() {
        let responder = DialogueResponder::new(FixedClassifier(Intent::ComplaintUpset), "Test Diner");
        let mut session = Session::fresh();

        let reply = responder.respond(&mut session, "anything at all");

        assert_eq!(reply, "Great! I can help you with complaint upset.");
        assert_eq!(session.current_intent, Some(Intent::ComplaintUpset));
    }

    #[test]
    fn test_name_prompts_per_intent() {
        assert_eq!(
            name_prompt(Intent::NewOrder),
            Some(NEW_ORDER_NAME_PROMPT)
        );
        assert_eq!(
            name_prompt(Intent::CancelOrder),
            Some(EXISTING_ORDER_NAME_PROMPT)
        );
        assert_eq!(name_prompt(Intent::GeneralInfo), None);
    }

    #[test]
    fn test_handoff_waits_for_name() {
        let responder: DialogueResponder = DialogueResponder::default();
        let mut session = Session::fresh();

        assert_eq!(responder.handoff(&session), None);

        responder.respond(&mut session, "I want a pizza");
        assert_eq!(responder.handoff(&session), None);

        session.record_name("Maria").unwrap();
        let handoff = responder.handoff(&session).unwrap();
        assert_eq!(handoff.collaborator, Collaborator::OrderManagement);
        assert_eq!(handoff.intent, Intent::NewOrder);
        assert_eq!(handoff.customer_name.as_deref(), Some("Maria"));
    }

    #[test]
    fn test_handoff_for_info_needs_no_name() {
        let responder: DialogueResponder = DialogueResponder::default();
        let mut session = Session::fresh();

        responder.respond(&mut session, "Where is your location?");
        let handoff = responder.handoff(&session).unwrap();

        assert_eq!(handoff.collaborator, Collaborator::MenuInfo);
        assert_eq!(handoff.customer_name, None);
    }

    #[test]
    fn test_no_handoff_for_unknown() {
        let responder: DialogueResponder = DialogueResponder::default();
        let mut session = Session::returning("John");

        responder.respond(&mut session, "Hi there");
        assert_eq!(responder.handoff(&session), None);
    }
}
