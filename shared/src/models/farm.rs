//! Farm profile models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Farm profile submitted during initial setup
///
/// Ephemeral: held in the setup form until acknowledged, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmSetupRequest {
    pub address: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub crop_type: CropType,
    pub growth_stage: GrowthStage,
    pub irrigation_method: IrrigationMethod,
    /// Weekly water requirement in millimeters, wire name `waterRequirement`
    #[serde(rename = "waterRequirement")]
    pub water_requirement_mm: Decimal,
}

/// Server acknowledgment for a farm setup submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmSetupConfirmation {
    pub success: bool,
    pub message: String,
    /// Mock reference of the form `FARM-<n>`; no uniqueness guarantee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<String>,
}

/// Crops supported by the setup form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Wheat,
    Corn,
    Soybean,
    Rice,
    Cotton,
}

/// Current growth stage of the crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seeding,
    Vegetative,
    Flowering,
    Ripening,
}

/// Irrigation method in use on the farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
    CenterPivot,
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropType::Wheat => write!(f, "Wheat"),
            CropType::Corn => write!(f, "Corn"),
            CropType::Soybean => write!(f, "Soybean"),
            CropType::Rice => write!(f, "Rice"),
            CropType::Cotton => write!(f, "Cotton"),
        }
    }
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrrigationMethod::Drip => write!(f, "Drip Irrigation"),
            IrrigationMethod::Sprinkler => write!(f, "Sprinkler System"),
            IrrigationMethod::Flood => write!(f, "Flood Irrigation"),
            IrrigationMethod::CenterPivot => write!(f, "Center Pivot"),
        }
    }
}
