//! Domain layer for the issue relay
//!
//! This module contains the issue and dispatch models, errors, and the
//! ports the services depend on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
