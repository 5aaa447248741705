//! Hydria Core Library
//!
//! This crate provides the domain models, technology field schema registry,
//! form validators, and route admission gate shared across Hydria components.
//! The core owns no entity itself: it is a pure validation and schema layer
//! sitting in front of a remote store.

pub mod auth;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use auth::{admit, decide, AuthStateProvider, RouteDecision, SessionContext};
pub use config::CoreConfig;
pub use connectivity::{registry, FieldError, FieldErrorReason, FieldKind, SchemaRegistry};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use validation::{
    validate_settings_form, validate_user_form, FieldErrors, FieldKey, FormMode, SettingsForm,
    UserForm,
};
