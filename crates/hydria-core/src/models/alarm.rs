use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Alarm severity levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmSeverity {
    Info,
    Warning,
    Critical,
}

/// Device or platform condition reported against a meter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmType {
    Leakage,
    Backflow,
    Tamper,
    LowBattery,
    NoConsumption,
    CommunicationLost,
}

/// Alarm raised against a meter. `cleared_at` is absent while active.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Alarm {
    pub id: Uuid,
    pub meter_id: Uuid,
    pub alarm_type: AlarmType,
    pub severity: AlarmSeverity,
    pub raised_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared_at: Option<DateTime<Utc>>,
}
