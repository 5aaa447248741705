use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Tenant (organizational unit) entity.
/// Tenants form a tree via `parent_id`; the hierarchy is assumed acyclic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response model for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantResponse {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub is_active: bool,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            name: tenant.name,
            parent_id: tenant.parent_id,
            is_active: tenant.is_active,
        }
    }
}

/// One page of a paginated tenant listing. The client flattens pages
/// into a single list for the assignment picker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantListPage {
    pub items: Vec<TenantResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
