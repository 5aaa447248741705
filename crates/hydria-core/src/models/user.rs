use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Platform-wide role levels, ordered from most to least privileged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemRole {
    PlatformAdmin,
    TenantAdmin,
    Operator,
    Viewer,
    FieldEngineer,
    Customer,
}

impl SystemRole {
    /// Default role for newly added tenant assignments.
    pub fn least_privileged() -> Self {
        SystemRole::Viewer
    }
}

impl Display for SystemRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SystemRole::PlatformAdmin => write!(f, "PLATFORM_ADMIN"),
            SystemRole::TenantAdmin => write!(f, "TENANT_ADMIN"),
            SystemRole::Operator => write!(f, "OPERATOR"),
            SystemRole::Viewer => write!(f, "VIEWER"),
            SystemRole::FieldEngineer => write!(f, "FIELD_ENGINEER"),
            SystemRole::Customer => write!(f, "CUSTOMER"),
        }
    }
}

impl FromStr for SystemRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLATFORM_ADMIN" => Ok(SystemRole::PlatformAdmin),
            "TENANT_ADMIN" => Ok(SystemRole::TenantAdmin),
            "OPERATOR" => Ok(SystemRole::Operator),
            "VIEWER" => Ok(SystemRole::Viewer),
            "FIELD_ENGINEER" => Ok(SystemRole::FieldEngineer),
            "CUSTOMER" => Ok(SystemRole::Customer),
            _ => Err(anyhow::anyhow!("Invalid system role: {}", s)),
        }
    }
}

/// A (tenant, role) pairing granting a user one permission level within
/// a single tenant. Order within a user's assignment list is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TenantAssignment {
    pub tenant_id: Uuid,
    pub role: SystemRole,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
    pub tenant_assignments: Vec<TenantAssignment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request models for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub is_active: bool,
    pub tenant_assignments: Vec<TenantAssignment>,
}

/// Edit flows never transmit a password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
    pub tenant_assignments: Vec<TenantAssignment>,
}

/// Response model for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub tenant_assignments: Vec<TenantAssignment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            is_active: user.is_active,
            tenant_assignments: user.tenant_assignments,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
