//! Petrol-generator running-cost comparison: what the household would burn
//! in fuel per year to cover the same daily energy. First-pass arithmetic
//! against the 8-hour fuel cost from the market survey, not an efficiency
//! model.

use crate::{
    catalog::generator::GeneratorCatalog,
    engine::result::GeneratorComparison,
    quantity::{cost::Naira, energy::WattHours},
};

const DAYS_IN_YEAR: f64 = 365.0;

#[must_use]
pub fn compare(catalog: &GeneratorCatalog, daily_energy: WattHours) -> Vec<GeneratorComparison> {
    catalog
        .generators()
        .iter()
        .map(|generator| GeneratorComparison {
            brand_model: generator.brand_model.clone(),
            capacity: generator.capacity,
            price_range: generator.price_range.clone(),
            estimated_annual_fuel_cost: annual_fuel_cost(
                generator.capacity.nameplate_watts().0,
                generator.fuel_cost_8_hours,
                daily_energy,
            ),
        })
        .collect()
}

fn annual_fuel_cost(hourly_output: f64, fuel_cost_8_hours: Naira, daily_energy: WattHours) -> Naira {
    let energy_in_8_hours = hourly_output * 8.0;
    if energy_in_8_hours == 0.0 {
        return Naira::ZERO;
    }

    // Scale the surveyed 8-hour fuel cost by the energy actually needed,
    // with a one-hour minimum run whenever there is any load at all:
    let scaled_daily_cost = fuel_cost_8_hours * (daily_energy.0 / energy_in_8_hours);
    let minimum_daily_cost =
        if daily_energy > WattHours::ZERO { fuel_cost_8_hours * (1.0 / 8.0) } else { Naira::ZERO };
    scaled_daily_cost.max(minimum_daily_cost) * DAYS_IN_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn test_scales_with_daily_energy() {
        // 14 kWh/day on a 2.5 kVA set producing 20 kWh per 8 h tank:
        let cost = annual_fuel_cost(2500.0, Naira::from(7200.0), Quantity(14_000.0));
        assert_eq!(cost, Naira::from(7200.0 * 0.7 * 365.0));
    }

    #[test]
    fn test_minimum_one_hour_run() {
        // A tiny load still pays for at least one hour a day:
        let cost = annual_fuel_cost(10_000.0, Naira::from(28_000.0), Quantity(100.0));
        assert_eq!(cost, Naira::from(28_000.0 / 8.0 * 365.0));
    }

    #[test]
    fn test_zero_energy_is_free() {
        let cost = annual_fuel_cost(2500.0, Naira::from(7200.0), WattHours::ZERO);
        assert_eq!(cost, Naira::ZERO);
    }
}
