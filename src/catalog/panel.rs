use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, cost::Naira, power::Watts};

/// The single panel model arrays are built from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PanelSpec {
    pub name: String,
    pub wattage: Watts,
    pub price: Naira,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            name: "550 W monocrystalline".to_string(),
            wattage: Quantity(550.0),
            price: Naira::from(150_000.0),
        }
    }
}
