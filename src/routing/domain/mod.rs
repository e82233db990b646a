//! Routing domain: intents, keyword rules, classifier input and routing
//! decisions.

mod decision;
mod intent;
mod request;
mod rules;

use thiserror::Error;

pub use decision::RoutingDecision;
pub use intent::{Intent, RouteTarget};
pub use request::ClassificationRequest;
pub use rules::{classify, keywords};

/// Error returned while parsing an intent label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown intent: {0}")]
pub struct ParseIntentError(pub String);
