//! The engine's output value. Every condition the pipeline can raise
//! (catalog exhaustion, a missing battery model, PV clipping) travels here
//! as data, never as control flow, so the rendering and report layers
//! decide how to present it.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    catalog::{battery::Chemistry, inverter::InverterTier},
    quantity::{
        cost::Naira,
        current::Amperes,
        energy::WattHours,
        power::{KiloVoltAmperes, Watts},
        voltage::Volts,
    },
};

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct LoadSummary {
    /// Worst case: every declared appliance running at once.
    pub peak_load: Watts,
    pub daily_energy: WattHours,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InverterSelection {
    pub tier: InverterTier,

    /// Set when the adjusted peak load is above every tier and the largest
    /// was returned as the best available fallback.
    pub exceeds_catalog: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryBank {
    pub chemistry: Chemistry,
    pub model_name: String,
    pub unit_capacity: WattHours,
    /// Units wired in series to reach the bus voltage (1 for lithium).
    pub series_count: u32,
    /// Parallel strings (tubular) or stacked units (lithium).
    pub parallel_count: u32,
    pub total_count: u32,
    pub total_capacity: WattHours,
    /// Total capacity × depth of discharge.
    pub usable_capacity: WattHours,
    pub total_price: Naira,
}

/// A bank either exists or the chemistry has no model at the bus voltage.
/// The latter is a distinguishable outcome, not an error: the other
/// chemistry variant still renders.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BankSelection {
    Selected(BatteryBank),
    NoSuitableModel { chemistry: Chemistry, bus_voltage: Volts },
}

impl BankSelection {
    #[must_use]
    pub const fn selected(&self) -> Option<&BatteryBank> {
        match self {
            Self::Selected(bank) => Some(bank),
            Self::NoSuitableModel { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SolarArray {
    pub panel_count: u32,
    pub panel_wattage: Watts,
    pub total_wattage: Watts,
    /// What the array must produce per day, after the loss buffer.
    pub required_daily_generation: WattHours,
    pub daily_output: WattHours,
    pub total_price: Naira,
}

/// Clipping annotation: the array would out-produce the inverter's rated
/// PV input. Never mutates the sizing itself; the caller decides whether
/// to re-run with the recommendation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PvInputWarning {
    pub array_wattage: Watts,
    pub inverter_size: KiloVoltAmperes,
    pub max_pv_input: Watts,
    pub recommended_inverter_size: Option<KiloVoltAmperes>,
}

impl Display for PvInputWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The recommended array ({}) exceeds the {} inverter's rated PV input ({}), \
             so harvest would be clipped at that ceiling.",
            self.array_wattage, self.inverter_size, self.max_pv_input,
        )?;
        match self.recommended_inverter_size {
            Some(size) => {
                write!(f, " Consider the {size} model, which can take the full array.")
            }
            None => write!(
                f,
                " No catalog inverter can take this array; a custom design is required."
            ),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BreakerSpec {
    /// Allowance-adjusted current the breaker and cable are sized for.
    pub current: Amperes,
    pub breaker_size: Amperes,
    pub breaker_out_of_range: bool,
    pub cable_cross_section_mm2: f64,
    pub cable_out_of_range: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct AvrSpec {
    pub computed: KiloVoltAmperes,
    pub size: KiloVoltAmperes,
    pub out_of_range: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SwitchKind {
    Manual,
    Automatic,
}

impl Display for SwitchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "Manual"),
            Self::Automatic => write!(f, "Automatic"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ChangeoverSpec {
    pub current: Amperes,
    pub size: Amperes,
    pub out_of_range: bool,
    pub kind: SwitchKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ProtectionResult {
    pub ac_breaker: BreakerSpec,
    pub dc_breaker: BreakerSpec,
    pub avr: AvrSpec,
    pub changeover: ChangeoverSpec,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PriceRange {
    pub lower: Naira,
    pub upper: Naira,
}

impl Display for PriceRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} – {}", self.lower, self.upper)
    }
}

/// Inverter + bank + array total for one chemistry variant.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ChemistryQuote {
    pub chemistry: Chemistry,
    pub base_price: Naira,
    pub range: PriceRange,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneratorComparison {
    pub brand_model: String,
    pub capacity: KiloVoltAmperes,
    pub price_range: String,
    pub estimated_annual_fuel_cost: Naira,
}

/// The finished sizing. Both chemistry variants are always present so the
/// caller can toggle the display without recomputation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SizingResult {
    pub load: LoadSummary,
    pub adjusted_peak_load: Watts,
    pub inverter: InverterSelection,
    pub tubular_bank: BankSelection,
    pub lithium_bank: BankSelection,
    pub solar: SolarArray,
    pub protection: ProtectionResult,
    pub tubular_quote: Option<ChemistryQuote>,
    pub lithium_quote: Option<ChemistryQuote>,
    pub generator_comparison: Vec<GeneratorComparison>,
    pub pv_warning: Option<PvInputWarning>,
}

impl SizingResult {
    #[must_use]
    pub const fn bank(&self, chemistry: Chemistry) -> &BankSelection {
        match chemistry {
            Chemistry::Tubular => &self.tubular_bank,
            Chemistry::Lithium => &self.lithium_bank,
        }
    }
}
