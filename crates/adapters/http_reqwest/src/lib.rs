//! # tutorhub-adapter-http-reqwest
//!
//! Implements the `DataClient` port on top of [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Join request paths onto the configured backend base URL
//! - Attach `Authorization: Bearer <token>` and JSON bodies
//! - Map transport failures, non-2xx statuses and malformed payloads to the
//!   matching `TutorHubError` variants
//!
//! One attempt per request: no retry, no backoff.

mod client;
mod error;

pub use client::ReqwestClient;
pub use error::ClientError;
