use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        fuel_mode::FuelMode,
        powertrain::Powertrain,
        preset::PresetBook,
        update::{Field, Update},
    },
    input::to_count,
    prelude::*,
    quantity::{
        distance::Kilometers,
        fuel::{Consumption, CostPerKm, EnergyPrice},
        money::Money,
        percentage::Percentage,
    },
};

/// Inputs describing one vehicle under comparison.
///
/// The fuel cost per kilometer is not stored: [`VehicleProfile::fuel_cost_per_km`] derives it
/// from the current powertrain, fuel price and consumption on every read.
#[must_use]
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct VehicleProfile {
    #[builder(into)]
    pub name: String,

    #[builder(default = Powertrain::Ice)]
    pub powertrain: Powertrain,

    #[builder(default = FuelMode::Custom)]
    pub fuel_mode: FuelMode,

    #[builder(default)]
    pub car_price: Money,

    #[builder(default)]
    pub discount: Money,

    #[builder(default)]
    pub other_discount: Money,

    /// Expected resale value as a percentage of the original car price.
    #[builder(default)]
    #[serde(rename = "resale_percent")]
    pub resale: Percentage,

    #[builder(default)]
    pub km_per_year: Kilometers,

    /// Holding period.
    #[builder(default)]
    pub years: u32,

    #[builder(default)]
    pub insurance: Money,

    #[builder(default)]
    pub maintenance: Money,

    #[builder(default)]
    pub registration: Money,

    #[builder(default)]
    pub miscellaneous: Money,

    /// One-time cost at the end of the holding period.
    #[builder(default)]
    pub maintenance_at_end: Money,

    #[builder(default)]
    pub fuel_consumption: Consumption,

    #[builder(default)]
    pub fuel_price: EnergyPrice,
}

impl VehicleProfile {
    pub const DEFAULT_CAR_PRICE: Money = Money(1_000_000.0);
    pub const DEFAULT_KM_PER_YEAR: Kilometers = Kilometers(20_000.0);
    pub const DEFAULT_YEARS: u32 = 10;

    /// Create a profile with the default usage and the running costs taken from the presets.
    pub fn new(name: impl Into<String>, powertrain: Powertrain, presets: &PresetBook) -> Self {
        Self::builder()
            .name(name)
            .fuel_mode(FuelMode::City)
            .car_price(Self::DEFAULT_CAR_PRICE)
            .km_per_year(Self::DEFAULT_KM_PER_YEAR)
            .years(Self::DEFAULT_YEARS)
            .build()
            .with(Update::Powertrain(powertrain), presets)
    }

    /// Apply the update and return the profile with all the dependent fields resolved.
    pub fn with(mut self, update: Update, presets: &PresetBook) -> Self {
        match update {
            Update::Rename(name) => {
                self.name = name;
            }
            Update::Powertrain(powertrain) => {
                let preset = presets.powertrain(powertrain);
                self.powertrain = powertrain;
                self.insurance = preset.insurance;
                self.maintenance = preset.maintenance;
                self.registration = preset.registration;
                self.miscellaneous = preset.miscellaneous;
                self.maintenance_at_end = preset.maintenance_at_end;
                self.resale = preset.resale;
                self.fuel_price = presets.fuel_price(powertrain);
                self.fuel_consumption = preset.consumption.get(self.fuel_mode);
            }
            Update::FuelMode(fuel_mode) => {
                self.fuel_mode = fuel_mode;
                if fuel_mode != FuelMode::Custom {
                    self.fuel_consumption = presets.consumption(self.powertrain, fuel_mode);
                }
            }
            Update::Set(field, value) => {
                self.set(field, value);
            }
        }
        self
    }

    pub fn with_all(self, updates: impl IntoIterator<Item = Update>, presets: &PresetBook) -> Self {
        updates.into_iter().fold(self, |profile, update| profile.with(update, presets))
    }

    fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::CarPrice => self.car_price = Money(value),
            Field::Discount => self.discount = Money(value),
            Field::OtherDiscount => self.other_discount = Money(value),
            Field::ResalePercent => self.resale = Percentage(value),
            Field::KmPerYear => self.km_per_year = Kilometers(value),
            Field::Years => self.years = to_count(value),
            Field::Insurance => self.insurance = Money(value),
            Field::Maintenance => self.maintenance = Money(value),
            Field::Registration => self.registration = Money(value),
            Field::Miscellaneous => self.miscellaneous = Money(value),
            Field::MaintenanceAtEnd => self.maintenance_at_end = Money(value),
            Field::FuelPrice => self.fuel_price = EnergyPrice(value),
            Field::FuelConsumption => {
                // A preset mode must keep showing its preset figure:
                if self.fuel_mode != FuelMode::Custom {
                    debug!(name = %self.name, from = %self.fuel_mode, "switching to the custom fuel mode");
                    self.fuel_mode = FuelMode::Custom;
                }
                self.fuel_consumption = Consumption(value);
            }
        }
    }

    pub fn fuel_cost_per_km(&self) -> CostPerKm {
        self.powertrain.fuel_cost_per_km(self.fuel_price, self.fuel_consumption)
    }

    pub fn total_distance(&self) -> Kilometers {
        self.km_per_year * f64::from(self.years)
    }
}
