//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod resource_service;
pub mod service_details;
pub mod session_service;
pub mod teacher_listing;

#[cfg(test)]
mod stub;

pub use resource_service::ResourceService;
pub use service_details::ServiceDetailsService;
pub use session_service::SessionService;
pub use teacher_listing::TeacherListingService;
