//! Stage 2: map the adjusted peak load onto a discrete (inverter size,
//! bus voltage) tier. The selected tier fixes the DC bus voltage for every
//! stage downstream.

use crate::{
    catalog::inverter::InverterTier,
    engine::result::InverterSelection,
    prelude::*,
    quantity::power::{KiloVoltAmperes, Watts},
};

/// Scans the ordered tier table and returns the first tier whose load
/// threshold covers the adjusted peak load. A matching `override_size`
/// short-circuits the scan (the re-entry path after an accepted upsize).
/// When no tier qualifies, the largest is returned with `exceeds_catalog`
/// set: a flag for the caller, not a failure.
///
/// # Panics
///
/// Panics if the tier table is empty, which no valid catalog permits.
#[must_use]
pub fn select(
    tiers: &[InverterTier],
    adjusted_peak_load: Watts,
    override_size: Option<KiloVoltAmperes>,
) -> InverterSelection {
    assert!(!tiers.is_empty(), "the inverter catalog must not be empty");

    if let Some(size) = override_size
        && let Some(tier) = tiers.iter().find(|tier| tier.size == size)
    {
        debug!(size = %tier.size, "using the requested inverter tier");
        return InverterSelection { tier: tier.clone(), exceeds_catalog: false };
    }

    match tiers.iter().find(|tier| tier.max_load >= adjusted_peak_load) {
        Some(tier) => InverterSelection { tier: tier.clone(), exceeds_catalog: false },
        None => {
            warn!(
                adjusted_peak_load = %adjusted_peak_load,
                "the load exceeds every catalog tier, falling back to the largest",
            );
            InverterSelection { tier: tiers[tiers.len() - 1].clone(), exceeds_catalog: true }
        }
    }
}
