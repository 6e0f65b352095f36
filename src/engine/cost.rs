//! Stage 7: sum the per-component prices for a chemistry variant and put a
//! symmetric uncertainty band around the total.

use crate::{
    catalog::battery::Chemistry,
    engine::result::{ChemistryQuote, PriceRange},
    quantity::cost::Naira,
};

#[must_use]
pub fn estimate(
    chemistry: Chemistry,
    inverter_price: Naira,
    bank_price: Naira,
    array_price: Naira,
    uncertainty: f64,
) -> ChemistryQuote {
    let base_price = inverter_price + bank_price + array_price;
    ChemistryQuote {
        chemistry,
        base_price,
        range: PriceRange {
            lower: (base_price * (1.0 - uncertainty)).floor(),
            upper: (base_price * (1.0 + uncertainty)).ceil(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_band() {
        let quote = estimate(
            Chemistry::Lithium,
            Naira::from(396_000.0),
            Naira::from(1_080_000.0),
            Naira::from(900_000.0),
            0.15,
        );
        assert_eq!(quote.base_price, Naira::from(2_376_000.0));
        assert_eq!(quote.range.lower, Naira::from(2_019_600.0));
        assert_eq!(quote.range.upper, Naira::from(2_732_400.0));
    }

    #[test]
    fn test_bounds_are_floored_and_ceiled() {
        let quote = estimate(
            Chemistry::Tubular,
            Naira::from(100.0),
            Naira::from(1.0),
            Naira::ZERO,
            0.15,
        );
        // 101 × 0.85 = 85.85 → 85; 101 × 1.15 = 116.15 → 117.
        assert_eq!(quote.range.lower, Naira::from(85.0));
        assert_eq!(quote.range.upper, Naira::from(117.0));
    }
}
