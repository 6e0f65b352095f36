use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Naira, power::KiloVoltAmperes};

/// A petrol generator the sized system competes against. `price_range` is
/// quoted text from the market survey, not a computed figure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PetrolGenerator {
    pub brand_model: String,
    pub capacity: KiloVoltAmperes,
    pub price_range: String,
    pub fuel_consumption_litres_per_hour: f64,
    pub fuel_cost_8_hours: Naira,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorCatalog(Vec<PetrolGenerator>);

impl GeneratorCatalog {
    #[must_use]
    pub fn generators(&self) -> &[PetrolGenerator] {
        &self.0
    }
}

impl Default for GeneratorCatalog {
    fn default() -> Self {
        Self(vec![
            generator("Elepaq SV2200", 2.5, "₦120,000 – ₦180,000", 0.9, 7_200.0),
            generator("Firman SPG3000", 4.5, "₦280,000 – ₦350,000", 1.5, 12_000.0),
            generator("Elemax SH6500EX", 6.5, "₦650,000 – ₦850,000", 2.2, 17_600.0),
            generator("Perkins 10kVA", 10.0, "₦1,800,000 – ₦2,500,000", 3.5, 28_000.0),
        ])
    }
}

fn generator(
    brand_model: &str,
    capacity: f64,
    price_range: &str,
    litres_per_hour: f64,
    fuel_cost_8_hours: f64,
) -> PetrolGenerator {
    PetrolGenerator {
        brand_model: brand_model.to_string(),
        capacity: KiloVoltAmperes(capacity),
        price_range: price_range.to_string(),
        fuel_consumption_litres_per_hour: litres_per_hour,
        fuel_cost_8_hours: Naira::from(fuel_cost_8_hours),
    }
}
