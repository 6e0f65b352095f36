//! Stage 6: balance-of-system protection: breakers, cable gauges, the
//! voltage regulator, and the changeover switch. Every computed value gets
//! the current allowance applied first, then rounds UP to a standard
//! catalog size; rounding down is never allowed.

use crate::{
    catalog::protection::ProtectionTables,
    engine::{
        Config,
        result::{AvrSpec, BreakerSpec, ChangeoverSpec, ProtectionResult, SwitchKind},
    },
    quantity::{
        current::Amperes,
        power::{KiloVoltAmperes, Watts},
        voltage::Volts,
    },
};

#[must_use]
pub fn size(
    tables: &ProtectionTables,
    config: &Config,
    adjusted_peak_load: Watts,
    inverter_power: Watts,
    bus_voltage: Volts,
) -> ProtectionResult {
    let allowance = config.current_allowance;

    let ac_current = adjusted_peak_load / config.mains_voltage / config.power_factor * allowance;
    let dc_current = inverter_power / bus_voltage * allowance;
    let switch_current = inverter_power / config.mains_voltage / config.power_factor * allowance;

    let avr_computed =
        KiloVoltAmperes(adjusted_peak_load.0 / (1000.0 * config.power_factor) * allowance);
    let (avr_size, avr_out_of_range) =
        round_up(avr_computed, &tables.avr_sizes, |size| size.0);

    let (switch_size, switch_out_of_range) =
        round_up(switch_current, &tables.switch_sizes, |size| size.0);

    ProtectionResult {
        ac_breaker: breaker(tables, ac_current),
        dc_breaker: breaker(tables, dc_current),
        avr: AvrSpec { computed: avr_computed, size: avr_size, out_of_range: avr_out_of_range },
        changeover: ChangeoverSpec {
            current: switch_current,
            size: switch_size,
            out_of_range: switch_out_of_range,
            kind: if inverter_power >= config.automatic_switch_threshold {
                SwitchKind::Automatic
            } else {
                SwitchKind::Manual
            },
        },
    }
}

fn breaker(tables: &ProtectionTables, current: Amperes) -> BreakerSpec {
    let (breaker_size, breaker_out_of_range) =
        round_up(current, &tables.breaker_sizes, |size| size.0);
    let cable = tables
        .cable_sizes
        .iter()
        .find(|entry| entry.max_current >= current)
        .or_else(|| tables.cable_sizes.last());
    BreakerSpec {
        current,
        breaker_size,
        breaker_out_of_range,
        cable_cross_section_mm2: cable.map_or(0.0, |entry| entry.cross_section_mm2),
        cable_out_of_range: cable.is_none_or(|entry| entry.max_current < current),
    }
}

/// First table entry that covers the value; the table maximum, flagged,
/// when nothing does. Tables are validated non-empty at the boundary.
fn round_up<T: Copy>(value: T, table: &[T], key: impl Fn(T) -> f64) -> (T, bool) {
    table
        .iter()
        .copied()
        .find(|candidate| key(*candidate) >= key(value))
        .map_or_else(|| (table[table.len() - 1], true), |selected| (selected, false))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::quantity::Quantity;

    use super::*;

    fn sized(adjusted_peak_load: f64, inverter_power: f64, bus_voltage: f64) -> ProtectionResult {
        size(
            &ProtectionTables::default(),
            &Config::default(),
            Quantity(adjusted_peak_load),
            Quantity(inverter_power),
            Quantity(bus_voltage),
        )
    }

    #[test]
    fn test_ac_breaker_rounds_up() {
        // 2015 W / (230 V × 0.8) × 1.25 = 13.69 A → 16 A breaker, 2.5 mm²:
        let result = sized(2015.0, 3600.0, 24.0);
        assert_abs_diff_eq!(result.ac_breaker.current.0, 13.688_859, epsilon = 1e-5);
        assert_eq!(result.ac_breaker.breaker_size, Quantity(16.0));
        assert_abs_diff_eq!(result.ac_breaker.cable_cross_section_mm2, 2.5);
        assert!(!result.ac_breaker.breaker_out_of_range);
    }

    #[test]
    fn test_dc_breaker_rounds_up() {
        // 3600 W / 24 V × 1.25 = 187.5 A, beyond the table, flagged:
        let result = sized(2015.0, 3600.0, 24.0);
        assert_abs_diff_eq!(result.dc_breaker.current.0, 187.5);
        assert_eq!(result.dc_breaker.breaker_size, Quantity(160.0));
        assert!(result.dc_breaker.breaker_out_of_range);
        assert!(result.dc_breaker.cable_out_of_range);
    }

    #[test]
    fn test_avr_rounds_up() {
        // 2015 / (1000 × 0.8) × 1.25 = 3.15 kVA → 3.5 kVA:
        let result = sized(2015.0, 3600.0, 24.0);
        assert_eq!(result.avr.size, KiloVoltAmperes(3.5));
        assert!(!result.avr.out_of_range);
    }

    #[test]
    fn test_switch_kind_threshold() {
        assert_eq!(sized(2015.0, 3600.0, 24.0).changeover.kind, SwitchKind::Manual);
        assert_eq!(sized(4000.0, 5000.0, 48.0).changeover.kind, SwitchKind::Automatic);
        assert_eq!(sized(4000.0, 6200.0, 48.0).changeover.kind, SwitchKind::Automatic);
    }

    /// Every selected standard size covers its computed value.
    #[test]
    fn test_rounding_never_goes_below() {
        for load in [500.0, 1550.0, 2015.0, 4000.0, 8000.0] {
            let result = sized(load, 3600.0, 24.0);
            assert!(result.ac_breaker.breaker_size.0 >= result.ac_breaker.current.0
                || result.ac_breaker.breaker_out_of_range);
            assert!(result.avr.size.0 >= result.avr.computed.0 || result.avr.out_of_range);
            assert!(result.changeover.size.0 >= result.changeover.current.0
                || result.changeover.out_of_range);
        }
    }
}
