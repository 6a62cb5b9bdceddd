//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`mapper`] - Entity to DTO conversions
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Role guards, rate limiting and tracing
//! - [`routes`] - Route tables

pub mod dto;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod routes;
