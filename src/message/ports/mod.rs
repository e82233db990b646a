//! Port contracts for the message subsystem.

pub mod store;

pub use store::{MessageStore, MessageStoreResult};
