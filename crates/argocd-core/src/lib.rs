//! # argocd-core
//!
//! Core types and utilities for talking to an Argo CD server.
//!
//! This crate provides the shared request executor, error handling, and
//! configuration used by the resource modules in `argocd-client`.
//!
//! ## Modules
//!
//! - [`error`] - Error types for API, network, and configuration failures
//! - [`config`] - Client configuration and validation
//! - [`http`] - The authenticated HTTP request executor
//! - [`query`] - Query-parameter builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod http;
pub mod query;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use http::ApiExecutor;
pub use query::QueryParams;
