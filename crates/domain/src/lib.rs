//! Domain layer for Nimbus
//!
//! Contains the weather value objects, the WMO weather-code table and the
//! display theme preference. This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
