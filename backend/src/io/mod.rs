//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain. Currently a single
//! REST implementation built on axum.

pub mod rest;

pub use rest::api_router;
