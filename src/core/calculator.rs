use serde::Serialize;

use crate::{
    core::profile::VehicleProfile,
    quantity::{distance::Kilometers, finite_or_zero, fuel::CostPerKm, money::Money},
};

/// Costs derived from a [`VehicleProfile`], never stored.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Breakdown {
    /// Purchase price after all the discounts, not clamped at zero.
    pub net_car_price: Money,

    pub fuel_per_km: CostPerKm,
    pub fuel_per_year: Money,

    /// All the recurring costs including fuel.
    pub yearly_cost: Money,

    pub resale_value: Money,

    /// Total cost of ownership over the holding period. Negative when the resale value
    /// exceeds the total outlay.
    pub total_cost: Money,

    pub total_distance: Kilometers,
    pub cost_per_year: Money,
    pub cost_per_km: CostPerKm,
}

/// Calculate the costs of the vehicle, deriving the fuel cost from the profile.
pub fn calculate(profile: &VehicleProfile) -> Breakdown {
    calculate_with_fuel_cost(profile, profile.fuel_cost_per_km())
}

/// Calculate the costs of the vehicle with an explicitly given fuel cost.
///
/// Runs in full precision, rounding is up to the presentation.
pub fn calculate_with_fuel_cost(profile: &VehicleProfile, fuel_per_km: CostPerKm) -> Breakdown {
    let years = f64::from(profile.years);

    let net_car_price = profile.car_price - profile.discount - profile.other_discount;
    let fuel_per_year = fuel_per_km * profile.km_per_year;
    let yearly_cost = profile.insurance
        + profile.maintenance
        + profile.registration
        + profile.miscellaneous
        + fuel_per_year;
    let resale_value = profile.car_price * profile.resale;
    let total_cost = net_car_price + yearly_cost * years + profile.maintenance_at_end - resale_value;

    let total_distance = profile.total_distance();
    Breakdown {
        net_car_price,
        fuel_per_km,
        fuel_per_year,
        yearly_cost,
        resale_value,
        total_cost,
        total_distance,
        cost_per_year: Money(finite_or_zero(total_cost.0 / years)),
        cost_per_km: CostPerKm(finite_or_zero(total_cost.0 / total_distance.0)),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{Powertrain, PresetBook},
        quantity::{
            fuel::{Consumption, EnergyPrice},
            percentage::Percentage,
        },
    };

    fn sedan() -> VehicleProfile {
        VehicleProfile::builder()
            .name("Sedan")
            .car_price(Money(1_000_000.0))
            .resale(Percentage(30.0))
            .km_per_year(Kilometers(20_000.0))
            .years(10)
            .insurance(Money(22_000.0))
            .maintenance(Money(8_000.0))
            .registration(Money(2_500.0))
            .build()
    }

    #[test]
    fn test_direct_fuel_cost() {
        let breakdown = calculate_with_fuel_cost(&sedan(), CostPerKm(2.2));
        assert_abs_diff_eq!(breakdown.net_car_price.0, 1_000_000.0);
        assert_abs_diff_eq!(breakdown.fuel_per_year.0, 44_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.yearly_cost.0, 76_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.resale_value.0, 300_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.total_cost.0, 1_465_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.cost_per_year.0, 146_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.cost_per_km.0, 7.325, epsilon = 1e-9);
    }

    #[test]
    fn test_derived_fuel_cost() {
        let profile = VehicleProfile {
            fuel_price: EnergyPrice(33.0),
            fuel_consumption: Consumption(15.0),
            ..sedan()
        };
        let breakdown = calculate(&profile);
        assert_abs_diff_eq!(breakdown.fuel_per_km.0, 2.2, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.total_cost.0, 1_465_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pure() {
        let profile = VehicleProfile::new("Car 1", Powertrain::Hybrid, &PresetBook::default());
        assert_eq!(calculate(&profile), calculate(&profile));
    }

    #[test]
    fn test_discounts_exceeding_price() {
        let profile = VehicleProfile {
            car_price: Money(100.0),
            discount: Money(80.0),
            other_discount: Money(50.0),
            ..sedan()
        };
        assert_abs_diff_eq!(calculate(&profile).net_car_price.0, -30.0);
    }

    #[test]
    fn test_maintenance_at_end() {
        let profile = VehicleProfile { maintenance_at_end: Money(50_000.0), ..sedan() };
        let breakdown = calculate_with_fuel_cost(&profile, CostPerKm(2.2));
        assert_abs_diff_eq!(breakdown.total_cost.0, 1_515_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_negative_total_cost() {
        let profile = VehicleProfile::builder()
            .name("Classic")
            .car_price(Money(1_000.0))
            .resale(Percentage(150.0))
            .years(1)
            .build();
        assert_abs_diff_eq!(calculate(&profile).total_cost.0, -500.0);
    }

    #[test]
    fn test_zero_years_and_distance() {
        let profile = VehicleProfile { years: 0, km_per_year: Kilometers::ZERO, ..sedan() };
        let breakdown = calculate_with_fuel_cost(&profile, CostPerKm(2.2));
        assert_abs_diff_eq!(breakdown.total_cost.0, 700_000.0);
        assert_abs_diff_eq!(breakdown.cost_per_year.0, 0.0);
        assert_abs_diff_eq!(breakdown.cost_per_km.0, 0.0);
    }
}
