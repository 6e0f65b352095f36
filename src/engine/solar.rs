//! Stage 4: size the solar array. The array must cover the larger of the
//! daily consumption and the energy needed to refill the required usable
//! battery capacity, plus a buffer for system losses.

use crate::{
    catalog::panel::PanelSpec,
    engine::{Config, result::SolarArray},
    prelude::*,
    quantity::{energy::WattHours, time::Hours},
};

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn size_array(
    config: &Config,
    panel: &PanelSpec,
    daily_energy: WattHours,
    required_usable_capacity: WattHours,
    peak_sun_hours: Hours,
) -> SolarArray {
    // Refilling the required usable capacity from its working depth,
    // accounting for charge losses. Zero at zero backup hours:
    let recharge_energy =
        required_usable_capacity * config.charge_depth_factor / config.charge_efficiency;
    let required_daily_generation =
        daily_energy.max(recharge_energy) * config.system_loss_buffer;

    let per_panel_daily = panel.wattage * peak_sun_hours;
    let panel_count = (required_daily_generation.0 / per_panel_daily.0).ceil() as u32;
    let total_wattage = panel.wattage * f64::from(panel_count);

    let array = SolarArray {
        panel_count,
        panel_wattage: panel.wattage,
        total_wattage,
        required_daily_generation,
        daily_output: total_wattage * peak_sun_hours,
        total_price: panel.price * f64::from(panel_count),
    };
    debug!(
        panels = array.panel_count,
        wattage = %array.total_wattage,
        output = %array.daily_output,
        "sized the solar array",
    );
    array
}
