use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Customer classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Individual,
    Organizational,
}

impl Display for CustomerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CustomerType::Individual => write!(f, "INDIVIDUAL"),
            CustomerType::Organizational => write!(f, "ORGANIZATIONAL"),
        }
    }
}

impl FromStr for CustomerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(CustomerType::Individual),
            "ORGANIZATIONAL" => Ok(CustomerType::Organizational),
            _ => Err(anyhow::anyhow!("Invalid customer type: {}", s)),
        }
    }
}

/// Customer entity. A customer belongs to exactly one tenant and may have
/// zero or more meters associated with it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub customer_type: CustomerType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
