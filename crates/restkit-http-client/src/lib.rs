//! Minimal JSON HTTP client bound to a single downstream host
//!
//! This crate provides a thin client over [`reqwest`] exposing the four REST
//! verbs with JSON marshaling, per-call headers and query parameters, and a
//! fixed per-call deadline. One [`HttpClient`] is created per target host and
//! shared across calls; each call is a single attempt with no retries.
//!
//! # Example
//!
//! ```no_run
//! use restkit_http_client::HttpClient;
//! use serde::Deserialize;
//!
//! #[derive(Default, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! async fn example() -> Result<(), restkit_http_client::Error> {
//!     let client = HttpClient::new("https://api.example.com");
//!     let mut user = User::default();
//!     let status = client.get("users/42", &mut user, None, None).await?;
//!     assert_eq!(status, 200);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;

pub use client::{HttpClient, REQUEST_TIMEOUT};
pub use error::Error;
