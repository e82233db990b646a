//! Unit tests for the routing module.

mod support;
