use serde::{Deserialize, Serialize};

use crate::quantity::{
    Quantity,
    cost::Naira,
    power::{KiloVoltAmperes, Watts},
    voltage::Volts,
};

/// One catalog row: a discrete inverter rating coupled to a DC bus voltage.
///
/// `max_load` is the per-tier load threshold the selector scans against;
/// `max_pv_input` is the rated maximum solar-array wattage the unit can
/// take before clipping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InverterTier {
    pub size: KiloVoltAmperes,
    pub bus_voltage: Volts,
    pub max_load: Watts,
    pub max_pv_input: Watts,
    pub price: Naira,
}

/// Ordered by `size`, smallest first. Selection and the upsize search both
/// rely on this order, so it is an invariant, not a convenience: loaded
/// tables are re-sorted on construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<InverterTier>")]
pub struct InverterCatalog(Vec<InverterTier>);

impl InverterCatalog {
    #[must_use]
    pub fn tiers(&self) -> &[InverterTier] {
        &self.0
    }

    #[must_use]
    pub fn largest(&self) -> Option<&InverterTier> {
        self.0.last()
    }
}

impl From<Vec<InverterTier>> for InverterCatalog {
    fn from(mut tiers: Vec<InverterTier>) -> Self {
        tiers.sort_by(|lhs, rhs| lhs.size.0.total_cmp(&rhs.size.0));
        Self(tiers)
    }
}

impl Default for InverterCatalog {
    fn default() -> Self {
        Self(vec![
            tier(2.0, 12.0, 1600.0, 2000.0, 288_000.0),
            tier(3.6, 24.0, 3200.0, 3500.0, 396_000.0),
            tier(4.2, 24.0, 4000.0, 4200.0, 396_000.0),
            tier(6.2, 48.0, 5500.0, 6000.0, 456_000.0),
            tier(8.2, 48.0, 7500.0, 8000.0, 816_000.0),
            tier(10.2, 48.0, 9500.0, 12_000.0, 840_000.0),
        ])
    }
}

fn tier(size: f64, bus_voltage: f64, max_load: f64, max_pv_input: f64, price: f64) -> InverterTier {
    InverterTier {
        size: KiloVoltAmperes(size),
        bus_voltage: Quantity(bus_voltage),
        max_load: Quantity(max_load),
        max_pv_input: Quantity(max_pv_input),
        price: Naira::from(price),
    }
}
