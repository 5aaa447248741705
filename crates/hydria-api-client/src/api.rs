//! Domain methods for the Hydria API client.
//!
//! Response types are re-exported from `hydria_core::models`. The tenant
//! listing is paginated server-side; `list_tenants` flattens the pages into
//! a single list for the tenant-assignment picker.

use crate::{api_prefix, ApiClient};
use anyhow::Result;
use hydria_core::models::{
    CreateUserRequest, PlatformSettingsResponse, TenantListPage, TenantResponse,
    UpdatePlatformSettingsRequest, UpdateUserRequest, UserResponse,
};
use uuid::Uuid;

impl ApiClient {
    /// Fetch up to `limit` tenants, walking pages until the limit or the end
    /// of the collection is reached.
    pub async fn list_tenants(&self, limit: i64) -> Result<Vec<TenantResponse>> {
        let path = format!("{}/tenants", api_prefix());
        let mut tenants: Vec<TenantResponse> = Vec::new();
        let mut offset: i64 = 0;

        loop {
            let remaining = limit - tenants.len() as i64;
            if remaining <= 0 {
                break;
            }

            let page: TenantListPage = self
                .get(
                    &path,
                    &[
                        ("limit", remaining.to_string()),
                        ("offset", offset.to_string()),
                    ],
                )
                .await?;

            let fetched = page.items.len() as i64;
            tenants.extend(page.items);

            offset += fetched;
            if fetched == 0 || offset >= page.total {
                break;
            }
        }

        tracing::debug!(count = tenants.len(), "fetched tenant list");
        Ok(tenants)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserResponse> {
        self.get(&format!("{}/users/{}", api_prefix(), id), &[])
            .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<UserResponse> {
        self.post_json(&format!("{}/users", api_prefix()), request)
            .await
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse> {
        self.put_json(&format!("{}/users/{}", api_prefix(), id), request)
            .await
    }

    pub async fn get_platform_settings(&self) -> Result<PlatformSettingsResponse> {
        self.get(&format!("{}/settings", api_prefix()), &[]).await
    }

    /// Upsert the settings singleton: the backend keeps at most one row, so
    /// create and update collapse into the same call.
    pub async fn upsert_platform_settings(
        &self,
        request: &UpdatePlatformSettingsRequest,
    ) -> Result<PlatformSettingsResponse> {
        self.put_json(&format!("{}/settings", api_prefix()), request)
            .await
    }
}
