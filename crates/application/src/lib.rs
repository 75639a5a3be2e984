//! Application layer - Use cases and orchestration
//!
//! Port definitions plus the services behind the weather panel: the
//! geocode-then-forecast search pipeline, the render state controller,
//! the pure view projection and the theme controller.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
