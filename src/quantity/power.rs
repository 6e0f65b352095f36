use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, current::Amperes, energy::WattHours, time::Hours, voltage::Volts};

pub type Watts = Quantity<f64, 1, 0, 0, 0>;

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}W", self.0)
    }
}

impl Mul<Hours> for Watts {
    type Output = WattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Div<Volts> for Watts {
    type Output = Amperes;

    fn div(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

/// Inverter and AVR nameplate rating. Kept apart from [`Watts`]: a kVA
/// figure is a rating, not a measured power, and the two must not add.
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct KiloVoltAmperes(pub f64);

impl KiloVoltAmperes {
    /// Nameplate volt-amperes treated as watts, the market convention for
    /// the DC-side calculations.
    #[must_use]
    pub const fn nameplate_watts(self) -> Watts {
        Quantity(self.0 * 1000.0)
    }
}

impl Display for KiloVoltAmperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kVA", self.0)
    }
}

impl Debug for KiloVoltAmperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kVA", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_times_time() {
        assert_eq!(Watts::from(550.0) * Hours::from(5.4), WattHours::from(2970.0));
    }

    #[test]
    fn test_power_over_voltage() {
        assert_eq!(Watts::from(4800.0) / Volts::from(48.0), Amperes::from(100.0));
    }
}
