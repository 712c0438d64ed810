//! # tutorhub-adapter-storage-json
//!
//! Implements the `LocalStorage` port with a single JSON object file
//! mapping keys to string values.
//!
//! ## Responsibilities
//! - Load the file once at startup (a missing file is an empty store)
//! - Rewrite the whole file after every change, through a temporary file
//!   renamed into place
//! - Map I/O and parse failures to `TutorHubError::Storage`

mod error;
mod file_storage;

pub use error::StorageError;
pub use file_storage::JsonFileStorage;
