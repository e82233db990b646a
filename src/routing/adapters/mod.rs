//! Intent classifier adapters.

pub mod keyword;
pub mod llm;

pub use keyword::KeywordClassifier;
pub use llm::LlmIntentClassifier;
