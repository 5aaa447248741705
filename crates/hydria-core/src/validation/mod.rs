//! Form validators
//!
//! Pure validators for the entity forms. Each validator takes candidate form
//! data plus a mode and returns a map of field-key to error message; an empty
//! map signals success. Validators never panic and never return `Err` - a
//! validation failure is data, not a fault.

pub mod settings_form;
pub mod user_form;

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use uuid::Uuid;

pub use settings_form::{validate_settings_form, SettingsForm};
pub use user_form::{validate_user_form, AssignmentRow, UserForm};

/// Whether the form is creating a new entity or editing an existing one.
/// Some rules (password policy) apply only on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Key of one validation error. Scalar fields are keyed by name; errors
/// inside a repeatable row list are keyed by the row's stable identifier so
/// that inserting or removing rows never re-attributes another row's error.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKey {
    Field { name: String },
    Row { row_id: Uuid, field: String },
}

impl FieldKey {
    pub fn field(name: &str) -> Self {
        FieldKey::Field {
            name: name.to_string(),
        }
    }

    pub fn row(row_id: Uuid, field: &str) -> Self {
        FieldKey::Row {
            row_id,
            field: field.to_string(),
        }
    }
}

/// Map of field errors produced by a validator. Empty means valid.
pub type FieldErrors = BTreeMap<FieldKey, String>;

// Simple local@domain.tld shape. No consecutive-dot or internationalized
// domain handling.
static EMAIL_PATTERN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// True when `value` looks like `local@domain.tld`.
pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
