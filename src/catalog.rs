//! Read-only reference data: component catalogs, standard-size tables, and
//! the location insolation table. The engine never reaches for globals;
//! everything is injected through [`Catalogs`] so tests can substitute
//! synthetic data.

pub mod battery;
pub mod generator;
pub mod insolation;
pub mod inverter;
pub mod panel;
pub mod protection;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{
        battery::BatteryCatalog, generator::GeneratorCatalog, insolation::InsolationTable,
        inverter::InverterCatalog, panel::PanelSpec, protection::ProtectionTables,
    },
    prelude::*,
};

/// The full bundle of reference data. `Default` carries the built-in
/// Nigerian-market tables; any subset can be overridden from a TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalogs {
    pub inverters: InverterCatalog,
    pub batteries: BatteryCatalog,
    pub panel: PanelSpec,
    pub insolation: InsolationTable,
    pub protection: ProtectionTables,
    pub generators: GeneratorCatalog,
}

impl Catalogs {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalogs from `{}`", path.display()))?;
        let catalogs: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse catalogs from `{}`", path.display()))?;
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// Selection scans and standard-size round-ups index into these tables,
    /// so an empty one is rejected at the boundary. The lithium list may be
    /// empty: that is the "no suitable model" outcome, not invalid data.
    pub fn validate(&self) -> Result {
        ensure!(!self.inverters.tiers().is_empty(), "the inverter catalog must not be empty");
        ensure!(!self.protection.breaker_sizes.is_empty(), "breaker sizes must not be empty");
        ensure!(!self.protection.avr_sizes.is_empty(), "AVR sizes must not be empty");
        ensure!(!self.protection.cable_sizes.is_empty(), "cable sizes must not be empty");
        ensure!(!self.protection.switch_sizes.is_empty(), "switch sizes must not be empty");
        Ok(())
    }
}
