//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod data_client;
pub mod local_storage;

pub use data_client::{ApiRequest, DataClient, Method};
pub use local_storage::{ACCESS_TOKEN_KEY, LocalStorage, USER_KEY};
