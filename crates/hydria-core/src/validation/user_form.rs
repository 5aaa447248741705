//! User create/edit form validation.
//!
//! The tenant-assignment list is a repeatable sub-form. Rows carry a stable
//! `row_id` generated at creation time; error keys use that identifier, so
//! removing a row never shifts the error associations of surviving rows.

use uuid::Uuid;

use crate::models::{CreateUserRequest, SystemRole, TenantAssignment, UpdateUserRequest};
use crate::validation::{is_valid_email, FieldErrors, FieldKey, FormMode};

const MIN_PASSWORD_LENGTH: usize = 8;

/// One row of the tenant-assignment sub-form. `tenant_id` is `None` until
/// the user picks a tenant; `role` defaults to the least-privileged value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub row_id: Uuid,
    pub tenant_id: Option<Uuid>,
    pub role: SystemRole,
}

impl AssignmentRow {
    pub fn new() -> Self {
        Self {
            row_id: Uuid::new_v4(),
            tenant_id: None,
            role: SystemRole::least_privileged(),
        }
    }
}

impl Default for AssignmentRow {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate data of the user create/edit form.
#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Only submitted in create mode; edit flows never transmit a password.
    pub password: Option<String>,
    pub is_active: bool,
    pub assignments: Vec<AssignmentRow>,
}

impl UserForm {
    /// Append a fresh assignment row and return its stable identifier.
    pub fn add_assignment_row(&mut self) -> Uuid {
        let row = AssignmentRow::new();
        let row_id = row.row_id;
        self.assignments.push(row);
        row_id
    }

    /// Remove the row with the given identifier. Surviving rows keep their
    /// identifiers, so previously reported errors still point at them.
    pub fn remove_assignment_row(&mut self, row_id: Uuid) {
        self.assignments.retain(|row| row.row_id != row_id);
    }

    /// Normalized create payload. Call only after validation passed in
    /// create mode; rows without a tenant are skipped and string fields are
    /// trimmed. Absent optionals stay absent rather than empty.
    pub fn to_create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            password: self.password.clone().unwrap_or_default(),
            is_active: self.is_active,
            tenant_assignments: self.collect_assignments(),
        }
    }

    /// Normalized update payload; never carries a password.
    pub fn to_update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            is_active: self.is_active,
            tenant_assignments: self.collect_assignments(),
        }
    }

    fn collect_assignments(&self) -> Vec<TenantAssignment> {
        self.assignments
            .iter()
            .filter_map(|row| {
                row.tenant_id.map(|tenant_id| TenantAssignment {
                    tenant_id,
                    role: row.role,
                })
            })
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate the user form. Returns a map of field errors; empty means the
/// form may be submitted.
pub fn validate_user_form(form: &UserForm, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.first_name.trim().is_empty() {
        errors.insert(
            FieldKey::field("first_name"),
            "First name is required".to_string(),
        );
    }
    if form.last_name.trim().is_empty() {
        errors.insert(
            FieldKey::field("last_name"),
            "Last name is required".to_string(),
        );
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert(FieldKey::field("email"), "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(
            FieldKey::field("email"),
            "Invalid email address".to_string(),
        );
    }

    if mode == FormMode::Create {
        match form.password.as_deref() {
            None | Some("") => {
                errors.insert(
                    FieldKey::field("password"),
                    "Password is required".to_string(),
                );
            }
            Some(password) if password.chars().count() < MIN_PASSWORD_LENGTH => {
                errors.insert(
                    FieldKey::field("password"),
                    format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
                );
            }
            Some(_) => {}
        }
    }

    let mut seen_tenants: Vec<Uuid> = Vec::new();
    for row in &form.assignments {
        match row.tenant_id {
            None => {
                errors.insert(
                    FieldKey::row(row.row_id, "tenant_id"),
                    "Tenant is required".to_string(),
                );
            }
            Some(tenant_id) => {
                if seen_tenants.contains(&tenant_id) {
                    // One role per tenant: the later duplicate row is rejected.
                    errors.insert(
                        FieldKey::row(row.row_id, "tenant_id"),
                        "Tenant is already assigned".to_string(),
                    );
                } else {
                    seen_tenants.push(tenant_id);
                }
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            password: Some("difference-engine".to_string()),
            is_active: true,
            assignments: vec![],
        }
    }

    #[test]
    fn test_valid_create_form_passes() {
        assert!(validate_user_form(&valid_form(), FormMode::Create).is_empty());
    }

    #[test]
    fn test_whitespace_names_are_rejected() {
        let mut form = valid_form();
        form.first_name = "   ".to_string();
        let errors = validate_user_form(&form, FormMode::Create);
        assert_eq!(
            errors.get(&FieldKey::field("first_name")).map(String::as_str),
            Some("First name is required")
        );
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = valid_form();

        form.password = Some("1234567".to_string());
        let errors = validate_user_form(&form, FormMode::Create);
        assert!(errors.contains_key(&FieldKey::field("password")));

        form.password = Some("12345678".to_string());
        let errors = validate_user_form(&form, FormMode::Create);
        assert!(!errors.contains_key(&FieldKey::field("password")));
    }

    #[test]
    fn test_password_never_checked_in_edit_mode() {
        let mut form = valid_form();
        form.password = None;
        assert!(validate_user_form(&form, FormMode::Edit).is_empty());

        form.password = Some(String::new());
        assert!(validate_user_form(&form, FormMode::Edit).is_empty());
    }

    #[test]
    fn test_email_rules() {
        let mut form = valid_form();

        form.email = "a@b.com".to_string();
        assert!(validate_user_form(&form, FormMode::Create).is_empty());

        form.email = "a.b@c.d.com".to_string();
        assert!(validate_user_form(&form, FormMode::Create).is_empty());

        form.email = "a@b".to_string();
        let errors = validate_user_form(&form, FormMode::Create);
        assert!(errors.contains_key(&FieldKey::field("email")));
    }

    #[test]
    fn test_new_row_defaults_to_least_privileged_role() {
        let row = AssignmentRow::new();
        assert_eq!(row.role, SystemRole::Viewer);
        assert!(row.tenant_id.is_none());
    }

    #[test]
    fn test_row_error_identity_survives_removal() {
        let mut form = valid_form();
        let row0 = form.add_assignment_row();
        let row1 = form.add_assignment_row();
        let row2 = form.add_assignment_row();
        form.assignments[1].tenant_id = Some(Uuid::new_v4());

        let errors = validate_user_form(&form, FormMode::Create);
        assert!(errors.contains_key(&FieldKey::row(row0, "tenant_id")));
        assert!(errors.contains_key(&FieldKey::row(row2, "tenant_id")));

        // Removing row 0 must not re-attribute row 2's error.
        form.remove_assignment_row(row0);
        let errors = validate_user_form(&form, FormMode::Create);
        assert!(!errors.contains_key(&FieldKey::row(row0, "tenant_id")));
        assert!(errors.contains_key(&FieldKey::row(row2, "tenant_id")));
        assert!(!errors.contains_key(&FieldKey::row(row1, "tenant_id")));
    }

    #[test]
    fn test_duplicate_tenant_rejected_on_later_row() {
        let mut form = valid_form();
        let tenant = Uuid::new_v4();
        let row0 = form.add_assignment_row();
        let row1 = form.add_assignment_row();
        form.assignments[0].tenant_id = Some(tenant);
        form.assignments[1].tenant_id = Some(tenant);

        let errors = validate_user_form(&form, FormMode::Create);
        assert!(!errors.contains_key(&FieldKey::row(row0, "tenant_id")));
        assert_eq!(
            errors
                .get(&FieldKey::row(row1, "tenant_id"))
                .map(String::as_str),
            Some("Tenant is already assigned")
        );
    }

    #[test]
    fn test_create_request_normalizes_fields() {
        let mut form = valid_form();
        form.first_name = "  Ada ".to_string();
        form.phone = "   ".to_string();
        let row = form.add_assignment_row();
        form.assignments[0].tenant_id = Some(Uuid::new_v4());
        let _ = row;

        let request = form.to_create_request();
        assert_eq!(request.first_name, "Ada");
        assert!(request.phone.is_none());
        assert_eq!(request.tenant_assignments.len(), 1);
        assert_eq!(request.tenant_assignments[0].role, SystemRole::Viewer);
    }
}
