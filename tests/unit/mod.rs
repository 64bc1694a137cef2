//! Unit tests for applicant-core components
//!
//! ## Organization
//!
//! - [`validation`] - Validator functions and their invariants
//! - [`value_objects`] - Value object construction and formatting
//! - [`lookup_result`] - Result combinators

pub mod validation;
