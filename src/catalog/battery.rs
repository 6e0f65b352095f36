use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::{
    Quantity,
    cost::Naira,
    energy::{AmpereHours, WattHours},
    voltage::Volts,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chemistry {
    Tubular,
    Lithium,
}

impl Chemistry {
    /// Fraction of rated capacity usable without damaging the cells. A
    /// chemistry constant, not a per-model figure.
    #[must_use]
    pub const fn depth_of_discharge(self) -> f64 {
        match self {
            Self::Tubular => 0.5,
            Self::Lithium => 0.9,
        }
    }
}

impl Display for Chemistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tubular => write!(f, "Tubular"),
            Self::Lithium => write!(f, "Lithium"),
        }
    }
}

/// The single deep-cycle tubular model the market standardises on. Banks
/// are built by wiring these in series to the bus voltage and adding
/// parallel strings for capacity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TubularModel {
    pub name: String,
    pub voltage: Volts,
    pub capacity: AmpereHours,
    pub price: Naira,
}

impl TubularModel {
    #[must_use]
    pub fn unit_capacity(&self) -> WattHours {
        self.voltage * self.capacity
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LithiumModel {
    pub name: String,
    pub voltage: Volts,
    pub amp_hours: AmpereHours,
    pub price: Naira,
}

impl LithiumModel {
    #[must_use]
    pub fn unit_capacity(&self) -> WattHours {
        self.voltage * self.amp_hours
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatteryCatalog {
    pub tubular: TubularModel,

    /// Keyed by bus voltage at selection time. Iteration order is the
    /// tie-break for equally priced candidates, so the order is part of
    /// the data.
    pub lithium: Vec<LithiumModel>,
}

impl BatteryCatalog {
    pub fn lithium_at(&self, bus_voltage: Volts) -> impl Iterator<Item = &LithiumModel> {
        self.lithium.iter().filter(move |model| model.voltage == bus_voltage)
    }
}

impl Default for BatteryCatalog {
    fn default() -> Self {
        Self {
            tubular: TubularModel {
                name: "220 Ah deep-cycle tubular".to_string(),
                voltage: Quantity(12.0),
                capacity: Quantity(220.0),
                price: Naira::from(240_000.0),
            },
            lithium: vec![
                lithium("5 kWh wall-mount", 24.0, 200.0, 1_080_000.0),
                lithium("5 kWh rack-mount", 48.0, 100.0, 1_080_000.0),
                lithium("7.6 kWh rack-mount", 48.0, 150.0, 1_320_000.0),
                lithium("10 kWh rack-mount", 48.0, 200.0, 1_920_000.0),
                lithium("15.5 kWh rack-mount", 48.0, 300.0, 2_400_000.0),
            ],
        }
    }
}

fn lithium(name: &str, voltage: f64, amp_hours: f64, price: f64) -> LithiumModel {
    LithiumModel {
        name: name.to_string(),
        voltage: Quantity(voltage),
        amp_hours: Quantity(amp_hours),
        price: Naira::from(price),
    }
}
