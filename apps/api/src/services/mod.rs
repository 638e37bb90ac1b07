//! Supporting services for the cats API
//!
//! - Health checks

pub mod health;

pub use health::HealthService;
