//! Intent classification and message routing.
//!
//! A [`services::Router`] owns a registry of constructed agents. For each
//! inbound message it records the message, classifies the content into an
//! [`domain::Intent`], picks the first registered agent serving that intent
//! (or the first assistant), forwards the message and annotates the
//! response with routing metadata.
//!
//! - **Domain**: intents, keyword rules, [`domain::ClassificationRequest`]
//!   and [`domain::RoutingDecision`]
//! - **Ports**: the [`ports::IntentClassifier`] contract
//! - **Adapters**: keyword and LLM-backed classifiers
//! - **Services**: [`services::AgentRegistry`] and [`services::Router`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
