//! Data models for the platform core
//!
//! This module contains all data structures used throughout the application,
//! organized by domain. Each sub-module represents a specific feature area.

mod alarm;
mod customer;
mod meter;
mod reading;
mod settings;
mod tenant;
mod user;

// Re-export all models for convenient imports
pub use alarm::*;
pub use customer::*;
pub use meter::*;
pub use reading::*;
pub use settings::*;
pub use tenant::*;
pub use user::*;
