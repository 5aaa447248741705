use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Platform-wide configuration singleton. At most one record exists;
/// the create operation is an upsert of that single row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformSettings {
    pub domain: String,
    pub callback_url: String,
    pub broker_url: String,
    pub platform_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert request for the settings singleton.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePlatformSettingsRequest {
    #[validate(length(min = 1, max = 255, message = "Domain is required"))]
    pub domain: String,
    #[validate(url(message = "Invalid callback URL"))]
    pub callback_url: String,
    #[validate(url(message = "Invalid broker URL"))]
    pub broker_url: String,
    #[validate(length(min = 1, max = 100, message = "Platform name is required"))]
    pub platform_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Invalid logo URL"))]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid support email"))]
    pub support_email: Option<String>,
}

/// Response model for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlatformSettingsResponse {
    pub domain: String,
    pub callback_url: String,
    pub broker_url: String,
    pub platform_name: String,
    pub logo_url: Option<String>,
    pub support_email: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlatformSettings> for PlatformSettingsResponse {
    fn from(settings: PlatformSettings) -> Self {
        Self {
            domain: settings.domain,
            callback_url: settings.callback_url,
            broker_url: settings.broker_url,
            platform_name: settings.platform_name,
            logo_url: settings.logo_url,
            support_email: settings.support_email,
            updated_at: settings.updated_at,
        }
    }
}
