use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, time::Hours};

/// State-by-state peak sun hours. Unknown keys fall back to
/// `default_peak_sun_hours` at lookup time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InsolationTable {
    pub default_peak_sun_hours: Hours,
    pub states: BTreeMap<String, Hours>,
}

impl InsolationTable {
    #[must_use]
    pub fn get(&self, location: &str) -> Option<Hours> {
        self.states.get(location).copied()
    }
}

impl Default for InsolationTable {
    fn default() -> Self {
        let states = [
            ("Adamawa", 6.4),
            ("Akwa Ibom", 5.8),
            ("Anambra", 5.6),
            ("Bauchi", 6.2),
            ("Bayelsa", 5.4),
            ("Benue", 6.0),
            ("Borno", 5.8),
            ("Cross River", 5.6),
            ("Delta", 5.4),
            ("Ebonyi", 6.0),
            ("Edo", 5.6),
            ("Ekiti", 5.4),
            ("Enugu", 6.0),
            ("Gombe", 5.4),
            ("Imo", 5.6),
            ("Jigawa", 5.6),
            ("Kaduna", 6.8),
            ("Kano", 6.6),
            ("Katsina", 6.2),
            ("Kebbi", 6.0),
            ("Kogi", 5.8),
            ("Kwara", 5.6),
            ("Lagos", 5.4),
            ("Niger", 5.8),
            ("Ogun", 5.6),
            ("Ondo", 5.4),
            ("Yobe", 7.2),
        ];
        Self {
            default_peak_sun_hours: Quantity(5.0),
            states: states
                .into_iter()
                .map(|(name, psh)| (name.to_string(), Quantity(psh)))
                .collect(),
        }
    }
}
