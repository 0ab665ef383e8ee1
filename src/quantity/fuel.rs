//! Energy prices and consumption.
//!
//! The unit depends on the powertrain: liters for combustion vehicles, kilowatt-hours for
//! electric ones. See [`crate::core::powertrain::Powertrain`].

use std::ops::Mul;

use crate::quantity::{distance::Kilometers, money::Money};

quantity!(
    /// Price per liter or per kilowatt-hour.
    EnergyPrice, suffix: "", precision: 2
);

quantity!(
    /// Kilometers per liter, or kilowatt-hours per 100 kilometers.
    Consumption, suffix: "", precision: 2
);

quantity!(CostPerKm, suffix: "/km", precision: 2);

impl Mul<Kilometers> for CostPerKm {
    type Output = Money;

    fn mul(self, distance: Kilometers) -> Self::Output {
        Money(self.0 * distance.0)
    }
}
