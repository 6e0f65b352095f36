use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, power::Watts, time::Hours, voltage::Volts};

pub type WattHours = Quantity<f64, 1, 1, 0, 0>;

impl Display for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.abs() >= 10_000.0 {
            write!(f, "{:.1} kWh", self.0 / 1000.0)
        } else {
            write!(f, "{:.0} Wh", self.0)
        }
    }
}

impl Debug for WattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}Wh", self.0)
    }
}

impl Div<Hours> for WattHours {
    type Output = Watts;

    fn div(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Div<Volts> for WattHours {
    type Output = AmpereHours;

    fn div(self, rhs: Volts) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

pub type AmpereHours = Quantity<f64, 0, 1, 1, 0>;

impl Display for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} Ah", self.0)
    }
}

impl Debug for AmpereHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}Ah", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_over_voltage() {
        // A 220 Ah 12 V tubular cell holds 2640 Wh:
        assert_eq!(WattHours::from(2640.0) / Volts::from(12.0), AmpereHours::from(220.0));
    }
}
