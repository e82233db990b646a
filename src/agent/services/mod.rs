//! Application services for building agents.

mod catalog;
mod factory;

pub use catalog::{
    AgentBuildRequest, AgentBuilder, AgentCatalog, CLASSIFIER_OPTION, HISTORY_LIMIT_OPTION,
    SYSTEM_MESSAGE_OPTION,
};
pub use factory::{AgentFactory, FactoryError, FactoryResult, RESEARCHER_PRIORITY};
