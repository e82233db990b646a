//! Port contracts for routing collaborators.

pub mod classifier;

pub use classifier::IntentClassifier;
