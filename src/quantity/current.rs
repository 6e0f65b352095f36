use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Amperes = Quantity<f64, 0, 0, 1, 0>;

impl Display for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} A", self.0)
    }
}

impl Debug for Amperes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}A", self.0)
    }
}
