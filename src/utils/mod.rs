//! Utility modules for the Tradecart API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: JWT token creation and verification
//! - [`pagination`]: Request pagination utilities
//! - [`password`]: Password hashing and verification
//! - [`serde`]: Custom serde serialization/deserialization helpers

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
pub mod serde;
