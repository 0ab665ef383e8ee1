use std::ops::Mul;

use crate::quantity::percentage::Percentage;

quantity!(
    /// Amount in the local currency.
    Money, suffix: "", precision: 2
);

impl Mul<Percentage> for Money {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        Self(self.0 * percentage.to_ratio())
    }
}
