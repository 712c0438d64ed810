//! # tutorhub-app
//!
//! Application layer — client state, use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DataClient` — JSON requests against the REST backend
//!   - `LocalStorage` — keyed storage holding the session token and user
//! - Hold the client-side state:
//!   - one generic `SliceState` per entity kind, aggregated by the `Store`
//!   - the service details form and the teacher listing
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ResourceService` — fetch all, fetch by id, save, filter teachers
//!   - `ServiceDetailsService` — load, edit and submit the service form
//!   - `TeacherListingService` — apply a filter, render the listing
//! - Gate dashboard pages by role
//!
//! ## Dependency rule
//! Depends on `tutorhub-domain` only (plus `tokio::sync` for the revision channel).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod async_result;
pub mod banner;
pub mod forms;
pub mod listing;
pub mod memory_storage;
pub mod pages;
pub mod ports;
pub mod resource;
pub mod services;
pub mod session;
pub mod slice;
pub mod store;
