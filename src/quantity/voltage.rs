use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{
    Quantity,
    current::Amperes,
    energy::{AmpereHours, WattHours},
    power::Watts,
};

/// Volts are watts per ampere, hence the negative current exponent.
pub type Volts = Quantity<f64, 1, 0, -1, 0>;

impl Display for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} V", self.0)
    }
}

impl Debug for Volts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}V", self.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Watts;

    fn mul(self, rhs: Amperes) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Mul<AmpereHours> for Volts {
    type Output = WattHours;

    fn mul(self, rhs: AmpereHours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
