//! Preset tables that seed a vehicle profile when a powertrain or fuel mode is selected.

use std::path::Path;

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{fuel_mode::FuelMode, powertrain::Powertrain},
    prelude::*,
    quantity::{
        fuel::{Consumption, EnergyPrice},
        money::Money,
        percentage::Percentage,
    },
};

/// All the preset tables.
///
/// Loadable from TOML. Sections missing from the file keep the built-in values.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetBook {
    #[serde(default)]
    pub fuel_price: FuelPrices,

    #[serde(default = "PowertrainPreset::ice")]
    pub ice: PowertrainPreset,

    #[serde(default = "PowertrainPreset::hybrid")]
    pub hybrid: PowertrainPreset,

    #[serde(default = "PowertrainPreset::ev")]
    pub ev: PowertrainPreset,
}

impl Default for PresetBook {
    fn default() -> Self {
        Self {
            fuel_price: FuelPrices::default(),
            ice: PowertrainPreset::ice(),
            hybrid: PowertrainPreset::hybrid(),
            ev: PowertrainPreset::ev(),
        }
    }
}

impl PresetBook {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let book: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse the presets from `{}`", path.display()))?;
        book.ensure_finite()
            .with_context(|| format!("invalid presets in `{}`", path.display()))?;
        info!("loaded the presets");
        Ok(book)
    }

    /// TOML accepts `nan` and `inf`, which must not reach the totals.
    fn ensure_finite(&self) -> Result {
        for (field, value) in [
            ("combustion", self.fuel_price.combustion.0),
            ("electric", self.fuel_price.electric.0),
        ] {
            ensure!(value.is_finite(), "`fuel_price.{field}` is not a finite number: {value}");
        }
        for powertrain in EnumSet::<Powertrain>::all() {
            for (field, value) in self.powertrain(powertrain).values() {
                ensure!(value.is_finite(), "{powertrain} `{field}` is not a finite number: {value}");
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    #[must_use]
    pub const fn powertrain(&self, powertrain: Powertrain) -> &PowertrainPreset {
        match powertrain {
            Powertrain::Ice => &self.ice,
            Powertrain::Hybrid => &self.hybrid,
            Powertrain::Ev => &self.ev,
        }
    }

    #[must_use]
    pub const fn fuel_price(&self, powertrain: Powertrain) -> EnergyPrice {
        if powertrain.is_electric() { self.fuel_price.electric } else { self.fuel_price.combustion }
    }

    #[must_use]
    pub const fn consumption(&self, powertrain: Powertrain, fuel_mode: FuelMode) -> Consumption {
        self.powertrain(powertrain).consumption.get(fuel_mode)
    }
}

/// Default energy prices.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPrices {
    /// Per liter, for combustion and hybrid vehicles.
    pub combustion: EnergyPrice,

    /// Per kilowatt-hour, for electric vehicles.
    pub electric: EnergyPrice,
}

impl Default for FuelPrices {
    fn default() -> Self {
        Self { combustion: EnergyPrice(35.0), electric: EnergyPrice(5.0) }
    }
}

/// Running cost defaults of a drivetrain.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowertrainPreset {
    pub insurance: Money,
    pub maintenance: Money,
    pub registration: Money,
    pub miscellaneous: Money,
    pub maintenance_at_end: Money,

    #[serde(rename = "resale_percent")]
    pub resale: Percentage,

    pub consumption: ConsumptionPreset,
}

impl PowertrainPreset {
    pub const fn ice() -> Self {
        Self {
            insurance: Money(22_000.0),
            maintenance: Money(8_000.0),
            registration: Money(2_500.0),
            miscellaneous: Money(0.0),
            maintenance_at_end: Money(0.0),
            resale: Percentage(30.0),
            consumption: ConsumptionPreset {
                city: Consumption(12.0),
                highway: Consumption(16.0),
                custom: Consumption(14.0),
            },
        }
    }

    pub const fn hybrid() -> Self {
        Self {
            insurance: Money(24_000.0),
            maintenance: Money(6_000.0),
            registration: Money(2_000.0),
            miscellaneous: Money(0.0),
            maintenance_at_end: Money(50_000.0),
            resale: Percentage(35.0),
            consumption: ConsumptionPreset {
                city: Consumption(22.0),
                highway: Consumption(19.0),
                custom: Consumption(20.0),
            },
        }
    }

    pub const fn ev() -> Self {
        Self {
            insurance: Money(28_000.0),
            maintenance: Money(4_000.0),
            registration: Money(1_500.0),
            miscellaneous: Money(0.0),
            maintenance_at_end: Money(0.0),
            resale: Percentage(25.0),
            consumption: ConsumptionPreset {
                city: Consumption(14.0),
                highway: Consumption(18.0),
                custom: Consumption(15.0),
            },
        }
    }

    /// Every figure keyed by its name in the presets file.
    const fn values(&self) -> [(&'static str, f64); 9] {
        [
            ("insurance", self.insurance.0),
            ("maintenance", self.maintenance.0),
            ("registration", self.registration.0),
            ("miscellaneous", self.miscellaneous.0),
            ("maintenance_at_end", self.maintenance_at_end.0),
            ("resale_percent", self.resale.0),
            ("consumption.city", self.consumption.city.0),
            ("consumption.highway", self.consumption.highway.0),
            ("consumption.custom", self.consumption.custom.0),
        ]
    }
}

/// Consumption figures indexed by [`FuelMode`].
///
/// The custom figure is only used when the powertrain changes while in the custom mode:
/// the previous figure would be in the wrong unit.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPreset {
    pub city: Consumption,
    pub highway: Consumption,
    pub custom: Consumption,
}

impl ConsumptionPreset {
    pub const fn get(&self, fuel_mode: FuelMode) -> Consumption {
        match fuel_mode {
            FuelMode::City => self.city,
            FuelMode::Highway => self.highway,
            FuelMode::Custom => self.custom,
        }
    }
}
