//! Middleware modules for request processing.
//!
//! This module contains the extractors and middleware that turn a raw
//! request into an authenticated principal and enforce role policy before
//! a handler runs.
//!
//! # Modules
//!
//! - [`auth`]: bearer-token extraction and the `AuthUser` extractor
//! - [`role`]: role-gating middleware for admin route groups
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The `AuthUser` extractor verifies the JWT and yields its claims
//! 3. Role middleware (where applied) compares the claims' role
//! 4. The handler executes only if every check passed
//!
//! A failed or missing credential is rejected with one uniform 401 body;
//! an authenticated principal with the wrong role gets a 403. The 401
//! check always runs first.

pub mod auth;
pub mod role;
