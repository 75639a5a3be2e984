//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer over the Open-Meteo
//! clients and the local filesystem, and provides configuration loading
//! and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, StorageConfig};
pub use telemetry::{LogFormat, LogTarget, TelemetryConfig, TelemetryError, init_telemetry};
