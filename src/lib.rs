//! Ambivo agents: capability-gated agent construction and message routing.
//!
//! This crate provides the routing core of a multi-agent conversational
//! system: a shared message envelope, capability flags derived from
//! configuration, a factory that refuses to build disabled agent kinds, and
//! a router that forwards each message to one registered agent.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for agents, LLMs, memory and
//!   classifiers
//! - **Adapters**: Concrete implementations of ports (in-memory history,
//!   built-in assistant, keyword and LLM classifiers)
//! - **Services**: The agent factory and the router
//!
//! # Modules
//!
//! - [`message`]: Message envelope and history storage
//! - [`agent`]: Agent contract, capabilities and the agent factory
//! - [`routing`]: Intent classification, agent registry and dispatch
//! - [`config`]: TOML configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod agent;
pub mod config;
pub mod message;
pub mod routing;
pub mod telemetry;
