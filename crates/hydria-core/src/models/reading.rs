use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A single consumption reading reported by a meter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Reading {
    pub id: Uuid,
    pub meter_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    /// Cumulative volume in liters at the time of the reading.
    pub volume_liters: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal_strength_dbm: Option<i32>,
}
