//! Human-readable rendering of a [`SizingResult`] and the catalogs. The
//! tables read the finished result; nothing here feeds back into sizing.

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    catalog::{Catalogs, battery::Chemistry},
    engine::result::{BankSelection, BreakerSpec, SizingResult},
};

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table
}

fn money(cell: impl ToString) -> Cell {
    Cell::new(cell).set_alignment(CellAlignment::Right)
}

pub fn build_summary_table(result: &SizingResult) -> Table {
    let mut table = base_table();
    table.set_header(vec!["", "Value"]);
    table.add_row(vec![Cell::new("Peak load"), Cell::new(result.load.peak_load)]);
    table.add_row(vec![Cell::new("Adjusted peak load"), Cell::new(result.adjusted_peak_load)]);
    table.add_row(vec![Cell::new("Daily energy"), Cell::new(result.load.daily_energy)]);

    let tier = &result.inverter.tier;
    let inverter = if result.inverter.exceeds_catalog {
        Cell::new(format!(
            "{} at {} (load exceeds the catalog maximum)",
            tier.size, tier.bus_voltage,
        ))
        .fg(Color::Red)
    } else {
        Cell::new(format!("{} at {}", tier.size, tier.bus_voltage))
    };
    table.add_row(vec![Cell::new("Inverter"), inverter]);
    table.add_row(vec![Cell::new("Inverter price"), money(tier.price)]);

    table.add_row(vec![
        Cell::new("Solar array"),
        Cell::new(format!(
            "{} × {} = {}",
            result.solar.panel_count, result.solar.panel_wattage, result.solar.total_wattage,
        )),
    ]);
    table.add_row(vec![Cell::new("Daily solar output"), Cell::new(result.solar.daily_output)]);
    table.add_row(vec![Cell::new("Array price"), money(result.solar.total_price)]);
    table
}

pub fn build_battery_table(result: &SizingResult) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        "Chemistry",
        "Model",
        "Bank",
        "Capacity",
        "Usable",
        "Price",
        "System total",
    ]);
    for chemistry in [Chemistry::Tubular, Chemistry::Lithium] {
        match result.bank(chemistry) {
            BankSelection::Selected(bank) => {
                let quote = match chemistry {
                    Chemistry::Tubular => result.tubular_quote,
                    Chemistry::Lithium => result.lithium_quote,
                };
                table.add_row(vec![
                    Cell::new(chemistry),
                    Cell::new(&bank.model_name),
                    Cell::new(format!("{}S × {}P", bank.series_count, bank.parallel_count)),
                    Cell::new(bank.total_capacity).set_alignment(CellAlignment::Right),
                    Cell::new(bank.usable_capacity).set_alignment(CellAlignment::Right),
                    money(bank.total_price),
                    quote.map_or_else(|| Cell::new("–"), |quote| money(quote.range)),
                ]);
            }
            BankSelection::NoSuitableModel { bus_voltage, .. } => {
                table.add_row(vec![
                    Cell::new(chemistry),
                    Cell::new(format!("no model at {bus_voltage}"))
                        .fg(Color::DarkYellow)
                        .add_attribute(Attribute::Italic),
                ]);
            }
        }
    }
    table
}

fn breaker_cells(name: &str, breaker: &BreakerSpec) -> Vec<Cell> {
    vec![
        Cell::new(name),
        Cell::new(breaker.current).set_alignment(CellAlignment::Right),
        Cell::new(breaker.breaker_size)
            .set_alignment(CellAlignment::Right)
            .fg(if breaker.breaker_out_of_range { Color::Red } else { Color::Reset }),
        Cell::new(format!("{} mm²", breaker.cable_cross_section_mm2))
            .set_alignment(CellAlignment::Right)
            .fg(if breaker.cable_out_of_range { Color::Red } else { Color::Reset }),
    ]
}

pub fn build_protection_table(result: &SizingResult) -> Table {
    let protection = &result.protection;
    let mut table = base_table();
    table.set_header(vec!["Component", "Current", "Size", "Cable"]);
    table.add_row(breaker_cells("AC breaker", &protection.ac_breaker));
    table.add_row(breaker_cells("DC breaker", &protection.dc_breaker));
    table.add_row(vec![
        Cell::new("AVR"),
        Cell::new(protection.avr.computed).set_alignment(CellAlignment::Right),
        Cell::new(protection.avr.size)
            .set_alignment(CellAlignment::Right)
            .fg(if protection.avr.out_of_range { Color::Red } else { Color::Reset }),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new(format!("Changeover ({})", protection.changeover.kind)),
        Cell::new(protection.changeover.current).set_alignment(CellAlignment::Right),
        Cell::new(protection.changeover.size)
            .set_alignment(CellAlignment::Right)
            .fg(if protection.changeover.out_of_range { Color::Red } else { Color::Reset }),
        Cell::new(""),
    ]);
    table
}

pub fn build_generator_table(result: &SizingResult) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Generator", "Capacity", "Purchase price", "Fuel cost per year"]);
    for comparison in &result.generator_comparison {
        table.add_row(vec![
            Cell::new(&comparison.brand_model),
            Cell::new(comparison.capacity).set_alignment(CellAlignment::Right),
            Cell::new(&comparison.price_range),
            money(comparison.estimated_annual_fuel_cost).fg(Color::Red),
        ]);
    }
    table
}

pub fn build_locations_table(catalogs: &Catalogs) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Location", "Peak sun hours"]);
    for (name, peak_sun_hours) in &catalogs.insolation.states {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(peak_sun_hours).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("(default)").add_attribute(Attribute::Dim),
        Cell::new(catalogs.insolation.default_peak_sun_hours).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_inverter_catalog_table(catalogs: &Catalogs) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Size", "Bus", "Max load", "Max PV input", "Price"]);
    for tier in catalogs.inverters.tiers() {
        table.add_row(vec![
            Cell::new(tier.size),
            Cell::new(tier.bus_voltage).set_alignment(CellAlignment::Right),
            Cell::new(tier.max_load).set_alignment(CellAlignment::Right),
            Cell::new(tier.max_pv_input).set_alignment(CellAlignment::Right),
            money(tier.price),
        ]);
    }
    table
}

pub fn build_battery_catalog_table(catalogs: &Catalogs) -> Table {
    let batteries = &catalogs.batteries;
    let mut table = base_table();
    table.set_header(vec!["Chemistry", "Model", "Voltage", "Capacity", "Price"]);
    table.add_row(vec![
        Cell::new(Chemistry::Tubular),
        Cell::new(&batteries.tubular.name),
        Cell::new(batteries.tubular.voltage).set_alignment(CellAlignment::Right),
        Cell::new(batteries.tubular.capacity).set_alignment(CellAlignment::Right),
        money(batteries.tubular.price),
    ]);
    for model in &batteries.lithium {
        table.add_row(vec![
            Cell::new(Chemistry::Lithium),
            Cell::new(&model.name),
            Cell::new(model.voltage).set_alignment(CellAlignment::Right),
            Cell::new(model.unit_capacity()).set_alignment(CellAlignment::Right),
            money(model.price),
        ]);
    }
    table
}
