//! The sizing pipeline: seven pure stages in strict dependency order, one
//! bounded re-entry when the caller accepts an inverter upsize. Given the
//! same request and catalogs, the result is identical on every run.

pub mod battery;
pub mod compatibility;
pub mod cost;
pub mod generator;
pub mod inverter;
pub mod load;
pub mod protection;
pub mod result;
pub mod solar;

use bon::Builder;

use crate::{
    catalog::{Catalogs, battery::Chemistry},
    engine::result::{BankSelection, SizingResult},
    prelude::*,
    quantity::{Quantity, power::Watts, time::Hours, voltage::Volts},
    request::SizingRequest,
};

/// Engine constants. Every figure is a first-pass market convention, not a
/// physical law, and all of them are injectable.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Peak-load multiplier before tier selection.
    pub safety_margin: f64,

    /// Fraction of usable bank capacity the array must refill daily.
    pub charge_depth_factor: f64,
    pub charge_efficiency: f64,

    /// Generation head-room for wiring and conversion losses.
    pub system_loss_buffer: f64,

    pub mains_voltage: Volts,
    pub power_factor: f64,
    pub current_allowance: f64,

    /// Inverters at or above this rating get an automatic changeover.
    pub automatic_switch_threshold: Watts,

    /// Symmetric half-width of the quoted price band.
    pub price_uncertainty: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safety_margin: 1.30,
            charge_depth_factor: 0.8,
            charge_efficiency: 0.9,
            system_loss_buffer: 1.2,
            mains_voltage: Quantity(230.0),
            power_factor: 0.8,
            current_allowance: 1.25,
            automatic_switch_threshold: Quantity(5000.0),
            price_uncertainty: 0.15,
        }
    }
}

#[derive(Builder)]
pub struct SizingEngine<'a> {
    catalogs: &'a Catalogs,

    #[builder(default)]
    config: Config,
}

impl SizingEngine<'_> {
    /// Runs the full pipeline. Flags and warnings travel inside the result;
    /// the only hard failure is a request that fails boundary validation.
    #[instrument(skip_all, fields(location = %request.preferences.location))]
    pub fn run(&self, request: &SizingRequest) -> Result<SizingResult> {
        request.validate()?;
        let preferences = &request.preferences;

        let load = load::aggregate(&request.appliances);
        let adjusted_peak_load = (load.peak_load * self.config.safety_margin).ceil();
        info!(
            peak = %load.peak_load,
            adjusted = %adjusted_peak_load,
            daily = %load.daily_energy,
            "aggregated the load profile",
        );

        let inverter = inverter::select(
            self.catalogs.inverters.tiers(),
            adjusted_peak_load,
            preferences.preferred_inverter_size,
        );
        let bus_voltage = inverter.tier.bus_voltage;
        info!(tier = %inverter.tier.size, bus = %bus_voltage, "selected the inverter tier");

        let backup_hours: Hours = Quantity(f64::from(preferences.backup_hours));
        let tubular_bank = battery::size_bank(
            &self.catalogs.batteries,
            load.daily_energy,
            backup_hours,
            bus_voltage,
            Chemistry::Tubular,
        );
        let lithium_bank = battery::size_bank(
            &self.catalogs.batteries,
            load.daily_energy,
            backup_hours,
            bus_voltage,
            Chemistry::Lithium,
        );

        // The recharge term comes from the required usable capacity, not
        // from the quantized bank: at zero backup hours it is zero and the
        // array is sized purely from consumption.
        let solar = solar::size_array(
            &self.config,
            &self.catalogs.panel,
            load.daily_energy,
            battery::required_usable_capacity(
                load.daily_energy,
                backup_hours,
                preferences.chemistry,
            ),
            self.peak_sun_hours(&preferences.location),
        );

        let pv_warning =
            compatibility::check(self.catalogs.inverters.tiers(), solar.total_wattage, &inverter.tier);

        let protection = protection::size(
            &self.catalogs.protection,
            &self.config,
            adjusted_peak_load,
            inverter.tier.size.nameplate_watts(),
            bus_voltage,
        );

        let quote = |bank: &BankSelection| {
            bank.selected().map(|bank| {
                cost::estimate(
                    bank.chemistry,
                    inverter.tier.price,
                    bank.total_price,
                    solar.total_price,
                    self.config.price_uncertainty,
                )
            })
        };
        let tubular_quote = quote(&tubular_bank);
        let lithium_quote = quote(&lithium_bank);

        let generator_comparison =
            generator::compare(&self.catalogs.generators, load.daily_energy);

        Ok(SizingResult {
            load,
            adjusted_peak_load,
            inverter,
            tubular_bank,
            lithium_bank,
            solar,
            protection,
            tubular_quote,
            lithium_quote,
            generator_comparison,
            pv_warning,
        })
    }

    fn peak_sun_hours(&self, location: &str) -> Hours {
        self.catalogs.insolation.get(location).unwrap_or_else(|| {
            warn!(location, "unknown location, using the default peak sun hours");
            self.catalogs.insolation.default_peak_sun_hours
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        quantity::power::KiloVoltAmperes,
        request::{ApplianceUsage, Preferences},
    };

    use super::*;

    fn example_request(chemistry: Chemistry) -> SizingRequest {
        SizingRequest {
            appliances: vec![
                appliance("LED bulbs", 100.0, 2, 4.0),
                appliance("Refrigerator", 150.0, 1, 24.0),
                appliance("Air conditioner", 1200.0, 1, 8.0),
            ],
            preferences: Preferences {
                backup_hours: 12,
                chemistry,
                location: "Lagos".to_string(),
                preferred_inverter_size: None,
            },
        }
    }

    fn appliance(name: &str, power: f64, quantity: u32, hours_per_day: f64) -> ApplianceUsage {
        ApplianceUsage {
            name: name.to_string(),
            power: Quantity(power),
            quantity,
            hours_per_day: Quantity(hours_per_day),
        }
    }

    #[test]
    fn test_worked_example_end_to_end() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();
        let result = engine.run(&example_request(Chemistry::Lithium)).unwrap();

        assert_eq!(result.load.peak_load, Quantity(1550.0));
        assert_eq!(result.load.daily_energy, Quantity(14_000.0));
        assert_eq!(result.adjusted_peak_load, Quantity(2015.0));
        // 2015 W crosses the 1600 W boundary into the 3.6 kVA / 24 V tier:
        assert_eq!(result.inverter.tier.size, KiloVoltAmperes(3.6));
        assert!(!result.inverter.exceeds_catalog);

        // Both variants are present for display toggling:
        assert!(result.tubular_bank.selected().is_some());
        assert!(result.lithium_bank.selected().is_some());
        assert!(result.tubular_quote.is_some());
        assert!(result.lithium_quote.is_some());
        assert_eq!(result.generator_comparison.len(), 4);
    }

    #[test]
    fn test_determinism() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();
        let request = example_request(Chemistry::Tubular);
        assert_eq!(engine.run(&request).unwrap(), engine.run(&request).unwrap());
    }

    /// The bus voltage in the result always comes from the selected tier.
    #[test]
    fn test_voltage_coupling() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();
        for backup_hours in [0, 6, 24] {
            let mut request = example_request(Chemistry::Lithium);
            request.preferences.backup_hours = backup_hours;
            let result = engine.run(&request).unwrap();
            let tier = catalogs
                .inverters
                .tiers()
                .iter()
                .find(|tier| tier.size == result.inverter.tier.size)
                .unwrap();
            assert_eq!(result.inverter.tier.bus_voltage, tier.bus_voltage);
        }
    }

    /// At zero backup hours the minimum bank still exists, but the array
    /// must be sized from daily consumption alone, not from refilling that
    /// minimum bank.
    #[test]
    fn test_zero_backup_array_is_consumption_driven() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();
        let request = SizingRequest {
            appliances: vec![appliance("Water pump", 2000.0, 1, 0.5)],
            preferences: Preferences {
                backup_hours: 0,
                chemistry: Chemistry::Lithium,
                location: "Lagos".to_string(),
                preferred_inverter_size: None,
            },
        };
        let result = engine.run(&request).unwrap();

        // 1000 Wh/day × 1.2 = 1200 Wh, one 550 W panel at 5.4 PSH:
        assert_abs_diff_eq!(result.solar.required_daily_generation.0, 1200.0);
        assert_eq!(result.solar.panel_count, 1);
        assert_eq!(result.solar.total_wattage, Quantity(550.0));
        assert!(result.lithium_bank.selected().is_some());
    }

    /// A 12 V system has no lithium model; the tubular variant must still
    /// render, and the lithium side must say so explicitly.
    #[test]
    fn test_lithium_missing_at_12_volts_keeps_partial_result() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();
        let request = SizingRequest {
            appliances: vec![appliance("Fan", 70.0, 2, 6.0)],
            preferences: Preferences {
                backup_hours: 4,
                chemistry: Chemistry::Lithium,
                location: "Kano".to_string(),
                preferred_inverter_size: None,
            },
        };
        let result = engine.run(&request).unwrap();
        assert_eq!(result.inverter.tier.bus_voltage, Quantity(12.0));
        assert!(matches!(result.lithium_bank, BankSelection::NoSuitableModel { .. }));
        assert!(result.lithium_quote.is_none());
        assert!(result.tubular_bank.selected().is_some());
        assert!(result.tubular_quote.is_some());
    }

    /// Accepting the upsize recommendation re-runs the pipeline once with
    /// the recommended tier as an override.
    #[test]
    fn test_upsize_re_entry() {
        let catalogs = Catalogs::default();
        let engine = SizingEngine::builder().catalogs(&catalogs).build();

        // A heavy night load on a small peak: lots of panels, small tier.
        let mut request = SizingRequest {
            appliances: vec![appliance("Freezer", 300.0, 4, 24.0)],
            preferences: Preferences {
                backup_hours: 24,
                chemistry: Chemistry::Lithium,
                location: "Lagos".to_string(),
                preferred_inverter_size: None,
            },
        };
        let first = engine.run(&request).unwrap();
        let warning = first.pv_warning.as_ref().expect("the array should clip");
        let recommended = warning.recommended_inverter_size.expect("an upsize should exist");

        request.preferences.preferred_inverter_size = Some(recommended);
        let second = engine.run(&request).unwrap();
        assert_eq!(second.inverter.tier.size, recommended);
        assert!(second.solar.total_wattage <= second.inverter.tier.max_pv_input);
    }
}
