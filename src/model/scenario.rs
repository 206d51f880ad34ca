//! Scenario values owned by the application shell

use crate::config::Config;
use crate::model::pricing::PricingRequest;

/// Current pricing inputs of the scenario being worked on.
///
/// These are the external values the pricing form seeds itself from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub current_ltv: String,
    pub current_closing_date: String,
}

impl Scenario {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.scenario_name.clone(),
            current_ltv: config.current_ltv.clone(),
            current_closing_date: config.current_closing_date.clone(),
        }
    }

    /// Adopt confirmed values as the new current values
    pub fn apply(&mut self, request: &PricingRequest) {
        self.current_ltv = request.desired_ltv.clone();
        self.current_closing_date = request.desired_closing_date.clone();
    }
}
