//! Integration tests for the lookup client and the composers that use it.

pub mod applicant;
pub mod http;
