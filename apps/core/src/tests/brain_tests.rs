//! Brain Module Tests
//!
//! Keyword classification across realistic customer phrasing.

use crate::brain::keywords::NEW_ORDER_KEYWORDS;
use crate::brain::{Classifier, Intent, IntentClassifier};

#[cfg(test)]
mod intent_classifier_tests {
    use super::*;

    #[test]
    fn test_new_order_keywords_without_earlier_collisions() {
        let classifier = IntentClassifier::new();

        for keyword in NEW_ORDER_KEYWORDS {
            let utterance = format!("Hello, {} please", keyword);
            assert_eq!(
                classifier.classify(&utterance),
                Intent::NewOrder,
                "Expected NewOrder for '{}'",
                utterance
            );
        }
    }

    #[test]
    fn test_phrasing_per_intent() {
        let classifier = IntentClassifier::new();

        let cases = vec![
            ("Two burgers and fries", Intent::NewOrder),
            ("I need to update my address", Intent::ChangeOrder),
            ("Change the drink to a lemonade", Intent::ChangeOrder),
            ("Cancel everything", Intent::CancelOrder),
            ("Is the menu online?", Intent::GeneralInfo),
            ("Where is your location?", Intent::GeneralInfo),
            ("I'd like to file a complaint", Intent::ComplaintUpset),
            ("This is an issue", Intent::ComplaintUpset),
            ("Thanks so much", Intent::Unknown),
        ];

        for (utterance, expected) in cases {
            assert_eq!(
                classifier.classify(utterance),
                expected,
                "Unexpected intent for '{}'",
                utterance
            );
        }
    }

    #[test]
    fn test_precedence_order_beats_problem() {
        let classifier = IntentClassifier::new();

        let result = classifier.analyze("I have a problem with my order");
        assert_eq!(result.intent, Intent::NewOrder);
        assert_eq!(result.matched_keyword.as_deref(), Some("order"));
    }

    #[test]
    fn test_precedence_change_beats_cancel_and_info() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("Change or cancel, whichever"), Intent::ChangeOrder);
        assert_eq!(classifier.classify("Remove the menu item"), Intent::CancelOrder);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        let classifier = IntentClassifier::new();

        // "together" contains "get"
        assert_eq!(classifier.classify("Let's eat together"), Intent::NewOrder);
        // "reopen" contains "open"
        assert_eq!(classifier.classify("When do you reopen?"), Intent::GeneralInfo);
        // "informal" contains "info"
        assert_eq!(classifier.classify("Is it informal?"), Intent::GeneralInfo);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = IntentClassifier::new();

        assert_eq!(classifier.classify("CANCEL"), Intent::CancelOrder);
        assert_eq!(classifier.classify("Menu"), Intent::GeneralInfo);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = IntentClassifier::new();

        for utterance in ["What are your hours?", "Hi there", "", "I want a pizza"] {
            assert_eq!(classifier.classify(utterance), classifier.classify(utterance));
            assert_eq!(classifier.analyze(utterance), classifier.analyze(utterance));
        }
    }

    #[test]
    fn test_classifier_through_trait_object() {
        let classifier: Box<dyn Classifier> = Box::new(IntentClassifier::default());

        assert_eq!(classifier.classify("modify it"), Intent::ChangeOrder);
    }
}
