pub mod cost;
pub mod current;
pub mod energy;
pub mod power;
pub mod time;
pub mod voltage;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensioned scalar: the const parameters are the exponents of power,
/// time, current, and cost. Cross-dimension arithmetic is spelled out as
/// explicit `Mul`/`Div` impls on the concrete aliases.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const TIME: isize, const CURRENT: isize, const COST: isize>(
    pub T,
);

impl<T, const POWER: isize, const TIME: isize, const CURRENT: isize, const COST: isize>
    Quantity<T, POWER, TIME, CURRENT, COST>
where
    Self: PartialOrd,
{
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }
}

impl<const POWER: isize, const TIME: isize, const CURRENT: isize, const COST: isize>
    Quantity<f64, POWER, TIME, CURRENT, COST>
{
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }

    #[must_use]
    pub const fn is_non_negative(self) -> bool {
        self.0 >= 0.0
    }
}

impl<T, const POWER: isize, const TIME: isize, const CURRENT: isize, const COST: isize> Mul<T>
    for Quantity<T, POWER, TIME, CURRENT, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, CURRENT, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize, const CURRENT: isize, const COST: isize> Div<T>
    for Quantity<T, POWER, TIME, CURRENT, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME, CURRENT, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
