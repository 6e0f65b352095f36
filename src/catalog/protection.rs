use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, current::Amperes, power::KiloVoltAmperes};

/// One row of the cable guide: the largest current a cross-section is
/// rated for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CableEntry {
    pub max_current: Amperes,
    pub cross_section_mm2: f64,
}

/// Nigerian standard sizes for the balance-of-system components. Every
/// table is ascending; round-up picks the first entry that covers the
/// computed value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtectionTables {
    pub breaker_sizes: Vec<Amperes>,
    pub avr_sizes: Vec<KiloVoltAmperes>,
    pub cable_sizes: Vec<CableEntry>,
    pub switch_sizes: Vec<Amperes>,
}

impl Default for ProtectionTables {
    fn default() -> Self {
        Self {
            breaker_sizes: amperes(&[10.0, 16.0, 20.0, 32.0, 40.0, 63.0, 100.0, 125.0, 160.0]),
            avr_sizes: [0.5, 1.0, 2.0, 3.5, 5.0, 10.0, 15.0, 20.0, 30.0, 50.0]
                .into_iter()
                .map(KiloVoltAmperes)
                .collect(),
            cable_sizes: vec![
                cable(10.0, 1.5),
                cable(20.0, 2.5),
                cable(25.0, 4.0),
                cable(32.0, 6.0),
                cable(40.0, 10.0),
                cable(63.0, 16.0),
                cable(100.0, 25.0),
                cable(125.0, 35.0),
                cable(160.0, 50.0),
            ],
            switch_sizes: amperes(&[32.0, 63.0, 100.0, 125.0, 160.0]),
        }
    }
}

fn amperes(values: &[f64]) -> Vec<Amperes> {
    values.iter().copied().map(Quantity).collect()
}

const fn cable(max_current: f64, cross_section_mm2: f64) -> CableEntry {
    CableEntry { max_current: Quantity(max_current), cross_section_mm2 }
}
