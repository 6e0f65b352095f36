//! The engine's input contract: a declared appliance list plus the
//! household's preferences. Validation happens here, at the boundary,
//! before the pipeline runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::battery::Chemistry,
    prelude::*,
    quantity::{power::{KiloVoltAmperes, Watts}, time::Hours},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApplianceUsage {
    pub name: String,
    pub power: Watts,
    pub quantity: u32,
    pub hours_per_day: Hours,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Preferences {
    /// How many hours of an outage the battery bank must ride through.
    pub backup_hours: u32,

    pub chemistry: Chemistry,

    /// State name, looked up in the insolation table.
    pub location: String,

    /// Skips threshold-based selection when it matches a catalog tier.
    /// This is the re-entry path after an accepted upsize recommendation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_inverter_size: Option<KiloVoltAmperes>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizingRequest {
    pub appliances: Vec<ApplianceUsage>,
    pub preferences: Preferences,
}

impl SizingRequest {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the request from `{}`", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse the request from `{}`", path.display()))
    }

    pub fn validate(&self) -> Result {
        for appliance in &self.appliances {
            ensure!(
                appliance.power.is_non_negative(),
                "`{}`: power must not be negative",
                appliance.name,
            );
            ensure!(
                (0.0..=24.0).contains(&appliance.hours_per_day.0),
                "`{}`: hours per day must be within 0–24, got {}",
                appliance.name,
                appliance.hours_per_day,
            );
        }
        ensure!(
            self.preferences.backup_hours <= 24,
            "backup hours must be within 0–24, got {}",
            self.preferences.backup_hours,
        );
        Ok(())
    }
}
