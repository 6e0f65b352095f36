//! Stage 3: size the battery bank for the required backup energy at the
//! bus voltage the inverter tier fixed.

use crate::{
    catalog::battery::{BatteryCatalog, Chemistry, LithiumModel},
    engine::result::{BankSelection, BatteryBank},
    prelude::*,
    quantity::{cost::Naira, energy::WattHours, time::Hours, voltage::Volts},
};

/// Backup energy prorates total daily consumption by the hour fraction.
/// This does not model the load actually active during the outage window;
/// the simplification is deliberate and downstream sizing depends on it.
fn backup_energy(daily_energy: WattHours, backup_hours: Hours) -> WattHours {
    daily_energy * (backup_hours.0 / 24.0)
}

/// Usable capacity the bank must deliver: backup energy divided by the
/// chemistry's depth of discharge. Zero at zero backup hours, which is why
/// the solar stage bases its recharge term on this figure rather than on
/// the quantized bank, whose minimum unit never goes to zero.
#[must_use]
pub fn required_usable_capacity(
    daily_energy: WattHours,
    backup_hours: Hours,
    chemistry: Chemistry,
) -> WattHours {
    backup_energy(daily_energy, backup_hours) / chemistry.depth_of_discharge()
}

/// Sizes one chemistry variant. The tubular path scales the single catalog
/// model into a series × parallel bank; the lithium path is a cost-optimal
/// scan over the models at the bus voltage. A bus voltage with no lithium
/// model yields [`BankSelection::NoSuitableModel`], never a model at some
/// other voltage.
#[must_use]
pub fn size_bank(
    catalog: &BatteryCatalog,
    daily_energy: WattHours,
    backup_hours: Hours,
    bus_voltage: Volts,
    chemistry: Chemistry,
) -> BankSelection {
    let required_usable = required_usable_capacity(daily_energy, backup_hours, chemistry);
    match chemistry {
        Chemistry::Tubular => size_tubular(catalog, required_usable, bus_voltage),
        Chemistry::Lithium => size_lithium(catalog, required_usable, bus_voltage),
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_tubular(
    catalog: &BatteryCatalog,
    required_usable: WattHours,
    bus_voltage: Volts,
) -> BankSelection {
    let model = &catalog.tubular;
    let series_count = (bus_voltage.0 / model.voltage.0).round() as u32;
    let required_amp_hours = required_usable / bus_voltage;

    // At zero backup hours this still wires one full string; the bank
    // exists even when the requirement is degenerate:
    let parallel_count = ((required_amp_hours.0 / model.capacity.0).ceil() as u32).max(1);
    let total_count = series_count * parallel_count;

    let bank = BatteryBank {
        chemistry: Chemistry::Tubular,
        model_name: model.name.clone(),
        unit_capacity: model.unit_capacity(),
        series_count,
        parallel_count,
        total_count,
        total_capacity: model.unit_capacity() * f64::from(total_count),
        usable_capacity: model.unit_capacity()
            * f64::from(total_count)
            * Chemistry::Tubular.depth_of_discharge(),
        total_price: model.price * f64::from(total_count),
    };
    debug!(count = bank.total_count, capacity = %bank.total_capacity, "sized the tubular bank");
    BankSelection::Selected(bank)
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_lithium(
    catalog: &BatteryCatalog,
    required_usable: WattHours,
    bus_voltage: Volts,
) -> BankSelection {
    // Explicit linear search, cheapest total wins, first match wins ties;
    // catalog order is part of the contract:
    let mut best: Option<(&LithiumModel, u32, Naira)> = None;
    for model in catalog.lithium_at(bus_voltage) {
        let needed_count =
            (((required_usable.0) / model.unit_capacity().0).ceil() as u32).max(1);
        let total_price = model.price * f64::from(needed_count);
        if best.as_ref().is_none_or(|(_, _, best_price)| total_price < *best_price) {
            best = Some((model, needed_count, total_price));
        }
    }

    let Some((model, count, total_price)) = best else {
        warn!(bus_voltage = %bus_voltage, "no lithium model exists at this bus voltage");
        return BankSelection::NoSuitableModel { chemistry: Chemistry::Lithium, bus_voltage };
    };

    let bank = BatteryBank {
        chemistry: Chemistry::Lithium,
        model_name: model.name.clone(),
        unit_capacity: model.unit_capacity(),
        series_count: 1,
        parallel_count: count,
        total_count: count,
        total_capacity: model.unit_capacity() * f64::from(count),
        usable_capacity: model.unit_capacity()
            * f64::from(count)
            * Chemistry::Lithium.depth_of_discharge(),
        total_price,
    };
    debug!(
        model = bank.model_name,
        count = bank.total_count,
        price = %bank.total_price,
        "selected the lithium bank",
    );
    BankSelection::Selected(bank)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::quantity::{Quantity, cost::Naira};

    use super::*;

    #[test]
    fn test_backup_energy_proration() {
        assert_abs_diff_eq!(
            backup_energy(Quantity(14_000.0), Quantity(6.0)).0,
            3500.0,
        );
    }

    #[test]
    fn test_required_usable_capacity() {
        // 3500 Wh of backup energy at 50 % DoD needs a 7000 Wh usable bank:
        assert_abs_diff_eq!(
            required_usable_capacity(Quantity(14_000.0), Quantity(6.0), Chemistry::Tubular).0,
            7000.0,
        );
        // Zero backup hours require nothing, whatever the chemistry:
        assert_eq!(
            required_usable_capacity(Quantity(14_000.0), Quantity(0.0), Chemistry::Lithium),
            WattHours::ZERO,
        );
    }

    #[test]
    fn test_tubular_series_and_strings() {
        // 14 kWh/day, 12 h backup → 7000 Wh backup energy, 14 000 Wh at
        // 50 % DoD → 291.7 Ah at 48 V → 2 strings of 4:
        let selection = size_bank(
            &BatteryCatalog::default(),
            Quantity(14_000.0),
            Quantity(12.0),
            Quantity(48.0),
            Chemistry::Tubular,
        );
        let bank = selection.selected().unwrap();
        assert_eq!(bank.series_count, 4);
        assert_eq!(bank.parallel_count, 2);
        assert_eq!(bank.total_count, 8);
        assert_eq!(bank.total_price, Naira::from(8.0 * 240_000.0));
    }

    #[test]
    fn test_zero_backup_keeps_the_minimum_bank() {
        let tubular = size_bank(
            &BatteryCatalog::default(),
            Quantity(14_000.0),
            Quantity(0.0),
            Quantity(24.0),
            Chemistry::Tubular,
        );
        assert_eq!(tubular.selected().unwrap().total_count, 2); // one 2-series string

        let lithium = size_bank(
            &BatteryCatalog::default(),
            Quantity(14_000.0),
            Quantity(0.0),
            Quantity(24.0),
            Chemistry::Lithium,
        );
        assert_eq!(lithium.selected().unwrap().total_count, 1);
    }

    #[test]
    fn test_lithium_is_cost_optimal() {
        // 20 kWh/day, 24 h backup → 22.2 kWh usable requirement at 48 V.
        let selection = size_bank(
            &BatteryCatalog::default(),
            Quantity(20_000.0),
            Quantity(24.0),
            Quantity(48.0),
            Chemistry::Lithium,
        );
        let bank = selection.selected().unwrap();

        // Whatever won must beat every other candidate on total price:
        let required_usable = 20_000.0 / 0.9;
        for model in BatteryCatalog::default().lithium_at(Quantity(48.0)) {
            let needed = (required_usable / model.unit_capacity().0).ceil().max(1.0);
            assert!(bank.total_price <= model.price * needed);
        }
    }

    #[test]
    fn test_lithium_missing_at_12_volts() {
        let selection = size_bank(
            &BatteryCatalog::default(),
            Quantity(5_000.0),
            Quantity(8.0),
            Quantity(12.0),
            Chemistry::Lithium,
        );
        assert_eq!(
            selection,
            BankSelection::NoSuitableModel {
                chemistry: Chemistry::Lithium,
                bus_voltage: Quantity(12.0),
            },
        );
    }

    /// More backup hours must never shrink the bank.
    #[test]
    fn test_monotonic_in_backup_hours() {
        let mut previous = 0;
        for backup_hours in 0..=24 {
            let selection = size_bank(
                &BatteryCatalog::default(),
                Quantity(14_000.0),
                Quantity(f64::from(backup_hours)),
                Quantity(48.0),
                Chemistry::Tubular,
            );
            let count = selection.selected().unwrap().total_count;
            assert!(count >= previous);
            previous = count;
        }
    }
}
