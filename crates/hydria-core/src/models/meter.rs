use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Meter lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeterStatus {
    Active,
    Passive,
    Warehouse,
    Maintenance,
    Planned,
    DeployedNotStarted,
}

/// Valve state as last reported by the device
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValveStatus {
    Open,
    Closed,
    Unknown,
}

/// Consumption classification derived from usage analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsumptionType {
    Normal,
    High,
}

/// Wireless/wired protocol used by a meter's connectivity module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationTechnology {
    Sigfox,
    Lorawan,
    NbIot,
    WmBus,
    Mioty,
    Wifi,
    Bluetooth,
    Nfc,
    Oms,
}

impl CommunicationTechnology {
    /// Exhaustive list of declared technologies. The field schema registry
    /// checks itself against this slice at construction time.
    pub const ALL: [CommunicationTechnology; 9] = [
        CommunicationTechnology::Sigfox,
        CommunicationTechnology::Lorawan,
        CommunicationTechnology::NbIot,
        CommunicationTechnology::WmBus,
        CommunicationTechnology::Mioty,
        CommunicationTechnology::Wifi,
        CommunicationTechnology::Bluetooth,
        CommunicationTechnology::Nfc,
        CommunicationTechnology::Oms,
    ];
}

impl Display for CommunicationTechnology {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CommunicationTechnology::Sigfox => write!(f, "SIGFOX"),
            CommunicationTechnology::Lorawan => write!(f, "LORAWAN"),
            CommunicationTechnology::NbIot => write!(f, "NB_IOT"),
            CommunicationTechnology::WmBus => write!(f, "WM_BUS"),
            CommunicationTechnology::Mioty => write!(f, "MIOTY"),
            CommunicationTechnology::Wifi => write!(f, "WIFI"),
            CommunicationTechnology::Bluetooth => write!(f, "BLUETOOTH"),
            CommunicationTechnology::Nfc => write!(f, "NFC"),
            CommunicationTechnology::Oms => write!(f, "OMS"),
        }
    }
}

impl FromStr for CommunicationTechnology {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIGFOX" => Ok(CommunicationTechnology::Sigfox),
            "LORAWAN" => Ok(CommunicationTechnology::Lorawan),
            "NB_IOT" => Ok(CommunicationTechnology::NbIot),
            "WM_BUS" => Ok(CommunicationTechnology::WmBus),
            "MIOTY" => Ok(CommunicationTechnology::Mioty),
            "WIFI" => Ok(CommunicationTechnology::Wifi),
            "BLUETOOTH" => Ok(CommunicationTechnology::Bluetooth),
            "NFC" => Ok(CommunicationTechnology::Nfc),
            "OMS" => Ok(CommunicationTechnology::Oms),
            _ => Err(anyhow::anyhow!("Invalid communication technology: {}", s)),
        }
    }
}

/// How the connectivity module is attached to the meter body
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommunicationModule {
    Integrated,
    Retrofit,
    None,
}

/// Manufacturer vocabulary for categorical selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Brand {
    Diehl,
    Itron,
    Kamstrup,
    Sensus,
    Zenner,
    Baylan,
    Other,
}

/// Hydraulic measurement principle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeterType {
    SingleJet,
    MultiJet,
    Volumetric,
    Ultrasonic,
    Woltman,
}

/// Register display type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialType {
    Dry,
    Wet,
    SemiDry,
    Electronic,
}

/// Ingress protection rating of the meter housing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpRating {
    Ip54,
    Ip65,
    Ip67,
    Ip68,
}

/// Hardware template shared by meters of the same make and model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeterProfile {
    pub id: Uuid,
    pub name: String,
    pub brand: Brand,
    pub meter_type: MeterType,
    pub dial_type: DialType,
    pub ip_rating: IpRating,
    pub communication_module: CommunicationModule,
    /// Nominal flow rate (Q3) in cubic meters per hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_flow_m3h: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One technology plus the identifier field values configured for it.
/// Field names map to the declarations in the technology field schema
/// registry; values are raw strings validated against those declarations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct TechnologyConfig {
    pub technology: CommunicationTechnology,
    pub fields: BTreeMap<String, String>,
}

/// Connectivity configuration of a single meter: one primary technology,
/// an optional secondary, and any number of additional configurations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectivityConfig {
    pub primary: TechnologyConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<TechnologyConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub others: Vec<TechnologyConfig>,
}

/// Physical water-metering device.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Meter {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub serial_number: String,
    pub profile_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,
    pub status: MeterStatus,
    pub valve_status: ValveStatus,
    pub consumption_type: ConsumptionType,
    pub connectivity: ConnectivityConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
