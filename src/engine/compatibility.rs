//! Stage 5: compare the array wattage to the inverter's rated PV input.
//! Pure annotation: the sizing itself is never touched here.

use crate::{
    catalog::inverter::InverterTier,
    engine::result::PvInputWarning,
    prelude::*,
    quantity::power::Watts,
};

/// Returns a clipping warning when the array out-produces the tier's PV
/// input ceiling, with the first larger tier that could take the full
/// array attached as a recommendation. No recommendation means no catalog
/// inverter fits and a custom design is required.
#[must_use]
pub fn check(
    tiers: &[InverterTier],
    total_array_wattage: Watts,
    selected: &InverterTier,
) -> Option<PvInputWarning> {
    if total_array_wattage <= selected.max_pv_input {
        return None;
    }

    // Ascending by size, starting above the current tier:
    let recommended = tiers
        .iter()
        .find(|tier| tier.size > selected.size && tier.max_pv_input >= total_array_wattage);

    let warning = PvInputWarning {
        array_wattage: total_array_wattage,
        inverter_size: selected.size,
        max_pv_input: selected.max_pv_input,
        recommended_inverter_size: recommended.map(|tier| tier.size),
    };
    warn!(%warning, "the array would clip at the inverter's PV input ceiling");
    Some(warning)
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::inverter::InverterCatalog,
        quantity::{Quantity, power::KiloVoltAmperes},
    };

    use super::*;

    #[test]
    fn test_no_warning_within_ceiling() {
        let catalog = InverterCatalog::default();
        assert_eq!(check(catalog.tiers(), Quantity(3300.0), &catalog.tiers()[1]), None);
    }

    #[test]
    fn test_recommends_the_first_sufficient_upsize() {
        let catalog = InverterCatalog::default();
        // 4400 W of panels against the 3.6 kVA tier (3500 W ceiling):
        let warning = check(catalog.tiers(), Quantity(4400.0), &catalog.tiers()[1]).unwrap();
        assert_eq!(warning.recommended_inverter_size, Some(KiloVoltAmperes(6.2)));
    }

    /// An array beyond every tier's ceiling yields a warning with no
    /// recommendation, not a crash.
    #[test]
    fn test_no_possible_upsize_means_custom_solution() {
        let catalog = InverterCatalog::default();
        let largest = catalog.largest().unwrap();
        let warning = check(catalog.tiers(), Quantity(50_000.0), largest).unwrap();
        assert_eq!(warning.recommended_inverter_size, None);
        assert!(warning.to_string().contains("custom design"));
    }
}
