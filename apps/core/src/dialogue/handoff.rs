//! Routing of a classified turn to the downstream system that fulfils it.

use serde::{Deserialize, Serialize};

use crate::brain::Intent;

/// External systems the assistant passes work to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collaborator {
    /// Places, changes and cancels orders
    OrderManagement,
    /// Answers hours, location and menu questions
    MenuInfo,
    /// Looks up past orders and handles complaints
    ComplaintDesk,
}

impl Collaborator {
    /// System responsible for an intent; `Unknown` has none
    pub fn for_intent(intent: Intent) -> Option<Self> {
        match intent {
            Intent::NewOrder | Intent::ChangeOrder | Intent::CancelOrder => {
                Some(Collaborator::OrderManagement)
            }
            Intent::GeneralInfo => Some(Collaborator::MenuInfo),
            Intent::ComplaintUpset => Some(Collaborator::ComplaintDesk),
            Intent::Unknown => None,
        }
    }
}

/// What the assistant hands to a collaborator. Nothing flows back into classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handoff {
    pub collaborator: Collaborator,
    pub intent: Intent,
    pub customer_name: Option<String>,
}
