//! Built-in agent implementations.

pub mod assistant;

pub use assistant::AssistantAgent;
