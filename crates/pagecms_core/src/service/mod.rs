//! Management use-case services.
//!
//! # Responsibility
//! - Orchestrate factory, validator and store calls into the operations
//!   the management surface performs.
//! - Keep editing surfaces decoupled from storage details.

pub mod section_service;
