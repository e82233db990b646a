//! Unit tests for the agent module.

mod support;
