//! Application layer - Use cases and orchestration
//!
//! Contains the weather and suggestion use cases plus the port definitions
//! their adapters implement. Orchestrates domain objects; knows nothing of
//! HTTP or concrete upstream providers.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
