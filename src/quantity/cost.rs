use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;

use crate::quantity::Quantity;

/// Naira amount. [`OrderedFloat`] gives the total order that cost-optimal
/// catalog selection needs.
pub type Naira = Quantity<OrderedFloat<f64>, 0, 0, 0, 1>;

impl Naira {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    #[must_use]
    pub fn floor(self) -> Self {
        Self(OrderedFloat(self.0.floor()))
    }

    #[must_use]
    pub fn ceil(self) -> Self {
        Self(OrderedFloat(self.0.ceil()))
    }
}

impl From<f64> for Naira {
    fn from(value: f64) -> Self {
        Self(OrderedFloat(value))
    }
}

impl Mul<f64> for Naira {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(OrderedFloat(self.0.0 * rhs))
    }
}

impl Display for Naira {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₦{}", group_thousands(self.0.0))
    }
}

impl Debug for Naira {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₦{:.0}", self.0.0)
    }
}

/// `en-NG` style grouping with no decimals, as quoted in the market.
#[expect(clippy::cast_possible_truncation)]
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index != 0 && (digits.len() - index).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
