//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering the envelope, its
//! serialised form, and the in-memory history store.
