//! Stage 1: reduce the appliance list to peak simultaneous load and total
//! daily energy.

use crate::{
    engine::result::LoadSummary,
    quantity::{energy::WattHours, power::Watts},
    request::ApplianceUsage,
};

/// Peak load assumes every declared appliance may run at once, a
/// deliberate worst case with no duty-cycle modelling. An empty list is a
/// legal degenerate input and sums to zero.
#[must_use]
pub fn aggregate(appliances: &[ApplianceUsage]) -> LoadSummary {
    let peak_load: Watts =
        appliances.iter().map(|appliance| appliance.power * f64::from(appliance.quantity)).sum();
    let daily_energy: WattHours = appliances
        .iter()
        .map(|appliance| {
            appliance.power * f64::from(appliance.quantity) * appliance.hours_per_day
        })
        .sum();
    LoadSummary { peak_load, daily_energy }
}
