//! HTTP middleware for request processing and protection.
//!
//! Provides Basic-auth role guards, rate limiting, and request tracing.

pub mod auth;
pub mod rate_limit;
pub mod tracing;
