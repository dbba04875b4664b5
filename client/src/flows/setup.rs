//! Farm setup flow
//!
//! Collects the farm profile, optionally filling coordinates through the
//! geolocation assist. Success navigates straight to the dashboard with no
//! confirmation interlude.

use std::time::Duration;

use rust_decimal::Decimal;

use shared::models::{CropType, FarmSetupRequest, GrowthStage, IrrigationMethod};
use shared::types::GpsCoordinates;
use shared::validation::validate_water_requirement;

use crate::api::FarmApi;
use crate::flows::{FlowState, Notice, SubmitResult};
use crate::session::Route;

const FAILURE_NOTICE: &str = "Failed to complete farm setup. Please try again.";
const LOCATE_DELAY: Duration = Duration::from_millis(1500);

/// The farm profile form
#[derive(Debug)]
pub struct SetupFlow {
    locate_delay: Duration,
    state: FlowState,
    address: String,
    coordinates: Option<GpsCoordinates>,
    crop_type: Option<CropType>,
    growth_stage: Option<GrowthStage>,
    irrigation_method: Option<IrrigationMethod>,
    water_requirement_mm: Option<Decimal>,
}

impl SetupFlow {
    pub fn new() -> Self {
        Self {
            locate_delay: LOCATE_DELAY,
            state: FlowState::Editing,
            address: String::new(),
            coordinates: None,
            crop_type: None,
            growth_stage: None,
            irrigation_method: None,
            water_requirement_mm: None,
        }
    }

    /// Override the geolocation-assist delay (tests)
    pub fn with_locate_delay(mut self, delay: Duration) -> Self {
        self.locate_delay = delay;
        self
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn coordinates(&self) -> Option<&GpsCoordinates> {
        self.coordinates.as_ref()
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
    }

    pub fn set_coordinates(&mut self, latitude: Decimal, longitude: Decimal) {
        self.coordinates = Some(GpsCoordinates::new(latitude, longitude));
    }

    pub fn set_crop_type(&mut self, crop_type: CropType) {
        self.crop_type = Some(crop_type);
    }

    pub fn set_growth_stage(&mut self, growth_stage: GrowthStage) {
        self.growth_stage = Some(growth_stage);
    }

    pub fn set_irrigation_method(&mut self, method: IrrigationMethod) {
        self.irrigation_method = Some(method);
    }

    /// Set the weekly water requirement. Negative values are ignored.
    pub fn set_water_requirement(&mut self, mm: Decimal) -> bool {
        if validate_water_requirement(mm).is_err() {
            return false;
        }
        self.water_requirement_mm = Some(mm);
        true
    }

    /// Geolocation assist: resolve the entered address to coordinates.
    ///
    /// Needs a non-empty address. The mock resolver waits out its lookup
    /// delay and fills a fixed location.
    pub async fn locate(&mut self) -> bool {
        if self.address.is_empty() {
            return false;
        }
        tokio::time::sleep(self.locate_delay).await;
        self.coordinates = Some(GpsCoordinates::new(
            Decimal::new(407_128, 4),
            Decimal::new(-740_060, 4),
        ));
        true
    }

    /// Submit is enabled once coordinates, crop selections, and the water
    /// requirement are all set
    pub fn can_submit(&self) -> bool {
        self.state == FlowState::Editing
            && self.coordinates.is_some()
            && self.crop_type.is_some()
            && self.growth_stage.is_some()
            && self.irrigation_method.is_some()
            && self.water_requirement_mm.is_some()
    }

    /// Complete the setup. Success navigates straight to the dashboard.
    pub async fn submit(&mut self, api: &dyn FarmApi) -> SubmitResult {
        if !self.can_submit() {
            return SubmitResult::NotReady;
        }
        let request = match self.build_request() {
            Some(request) => request,
            None => return SubmitResult::NotReady,
        };

        self.state = FlowState::Submitting;
        match api.complete_farm_setup(&request).await {
            Ok(_) => {
                self.state = FlowState::Editing;
                SubmitResult::Confirmed {
                    navigate_to: Some(Route::Dashboard),
                }
            }
            Err(error) => {
                tracing::error!("Error setting up farm: {}", error);
                self.state = FlowState::Editing;
                SubmitResult::Rejected(Notice::error(FAILURE_NOTICE))
            }
        }
    }

    fn build_request(&self) -> Option<FarmSetupRequest> {
        let coordinates = self.coordinates.as_ref()?;
        Some(FarmSetupRequest {
            address: self.address.clone(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            crop_type: self.crop_type?,
            growth_stage: self.growth_stage?,
            irrigation_method: self.irrigation_method?,
            water_requirement_mm: self.water_requirement_mm?,
        })
    }
}

impl Default for SetupFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_flow() -> SetupFlow {
        let mut flow = SetupFlow::new();
        flow.set_address("1 Farm Road");
        flow.set_coordinates(Decimal::new(407_128, 4), Decimal::new(-740_060, 4));
        flow.set_crop_type(CropType::Wheat);
        flow.set_growth_stage(GrowthStage::Seeding);
        flow.set_irrigation_method(IrrigationMethod::Drip);
        flow.set_water_requirement(Decimal::from(25));
        flow
    }

    #[test]
    fn complete_form_can_submit() {
        assert!(filled_flow().can_submit());
    }

    #[test]
    fn water_requirement_is_required() {
        let mut flow = SetupFlow::new();
        flow.set_coordinates(Decimal::from(40), Decimal::from(-74));
        flow.set_crop_type(CropType::Corn);
        flow.set_growth_stage(GrowthStage::Vegetative);
        flow.set_irrigation_method(IrrigationMethod::Sprinkler);
        assert!(!flow.can_submit());
    }

    #[test]
    fn negative_water_requirement_is_ignored() {
        let mut flow = SetupFlow::new();
        assert!(!flow.set_water_requirement(Decimal::from(-5)));
        assert!(flow.set_water_requirement(Decimal::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn locate_needs_an_address() {
        let mut flow = SetupFlow::new().with_locate_delay(Duration::ZERO);
        assert!(!flow.locate().await);
        flow.set_address("1 Farm Road");
        assert!(flow.locate().await);
        assert!(flow.coordinates().is_some());
    }
}
