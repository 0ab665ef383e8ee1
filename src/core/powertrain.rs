use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::quantity::{
    finite_or_zero,
    fuel::{Consumption, CostPerKm, EnergyPrice},
};

#[derive(Debug, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum Powertrain {
    /// Internal combustion engine.
    Ice,

    /// Combustion engine assisted by an electric motor, fuelled at the pump.
    Hybrid,

    /// Battery electric vehicle, charged from the grid.
    Ev,
}

impl Display for Powertrain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ice => write!(f, "ICE"),
            Self::Hybrid => write!(f, "Hybrid"),
            Self::Ev => write!(f, "EV"),
        }
    }
}

impl Powertrain {
    pub const fn is_electric(self) -> bool {
        matches!(self, Self::Ev)
    }

    /// Energy cost of driving one kilometer.
    ///
    /// For electric vehicles, the consumption is in kilowatt-hours per 100 km and the price is
    /// per kilowatt-hour. Otherwise, the consumption is in kilometers per liter and the price
    /// is per liter. Zero consumption is allowed while the user is typing and yields zero cost.
    pub fn fuel_cost_per_km(self, price: EnergyPrice, consumption: Consumption) -> CostPerKm {
        let cost = if self.is_electric() {
            (consumption.0 / 100.0) * price.0
        } else {
            price.0 / consumption.0
        };
        CostPerKm(finite_or_zero(cost))
    }

    pub const fn consumption_unit(self) -> &'static str {
        if self.is_electric() { "kWh/100 km" } else { "km/L" }
    }

    pub const fn price_unit(self) -> &'static str {
        if self.is_electric() { "/kWh" } else { "/L" }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Ice => Color::DarkYellow,
            Self::Hybrid => Color::Cyan,
            Self::Ev => Color::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_electric_cost() {
        let cost = Powertrain::Ev.fuel_cost_per_km(EnergyPrice(5.0), Consumption(15.0));
        assert_abs_diff_eq!(cost.0, 0.75);
    }

    #[test]
    fn test_combustion_cost() {
        let cost = Powertrain::Ice.fuel_cost_per_km(EnergyPrice(30.0), Consumption(14.0));
        assert_abs_diff_eq!(cost.0, 2.142_857, epsilon = 1e-6);
    }

    #[test]
    fn test_hybrid_uses_combustion_formula() {
        let cost = Powertrain::Hybrid.fuel_cost_per_km(EnergyPrice(30.0), Consumption(20.0));
        assert_abs_diff_eq!(cost.0, 1.5);
    }

    #[test]
    fn test_zero_consumption() {
        for powertrain in EnumSet::<Powertrain>::all() {
            let cost = powertrain.fuel_cost_per_km(EnergyPrice(30.0), Consumption::ZERO);
            assert_abs_diff_eq!(cost.0, 0.0);
        }
        let cost = Powertrain::Ice.fuel_cost_per_km(EnergyPrice::ZERO, Consumption::ZERO);
        assert_abs_diff_eq!(cost.0, 0.0);
    }
}
