//! Modules layer - Infrastructure components backing the features
//!
//! Contains the in-memory queue store shared by every feature.

pub mod queue_store;
