//! # BFHL Common Library
//!
//! Shared code for the BFHL service:
//! - Request/response wire types for `POST /bfhl`
//! - Token classification (odd/even numbers, alphabets, special characters)
//! - Identity configuration loading
//! - Error types

pub mod api;
pub mod classify;
pub mod config;
pub mod error;

pub use api::types::{BfhlResponse, DataRequest};
pub use classify::{classify, Classification, ClassifyError};
pub use config::IdentityConfig;
pub use error::{Error, Result};
