//! # tutorhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: pure HTML forms posting back to the server
//! - Gate every dashboard page by the logged-in user's role, answering
//!   `403 Forbidden` with a fixed view at the same route otherwise
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTML responses
//!
//! ## Dependency rule
//! Depends on `tutorhub-app` (for port traits and services) and `tutorhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
