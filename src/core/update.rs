use std::fmt::{Display, Formatter};

use crate::core::{fuel_mode::FuelMode, powertrain::Powertrain};

/// Single user interaction against a vehicle profile.
///
/// Applied by [`crate::core::VehicleProfile::with`] as a whole: the dependent fields change
/// together with the selected one.
#[derive(Clone, Debug, PartialEq)]
pub enum Update {
    Rename(String),

    /// Select the powertrain and overwrite the running costs from its preset.
    Powertrain(Powertrain),

    /// Select the fuel mode and resolve the consumption from the presets.
    FuelMode(FuelMode),

    /// Edit a numeric field.
    Set(Field, f64),
}

/// User-editable numeric field of a vehicle profile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum Field {
    CarPrice,
    Discount,
    OtherDiscount,
    ResalePercent,
    KmPerYear,
    Years,
    Insurance,
    Maintenance,
    Registration,
    Miscellaneous,
    MaintenanceAtEnd,
    FuelConsumption,
    FuelPrice,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CarPrice => "car price",
            Self::Discount => "discount",
            Self::OtherDiscount => "other discount",
            Self::ResalePercent => "resale percent",
            Self::KmPerYear => "distance per year",
            Self::Years => "holding period",
            Self::Insurance => "insurance",
            Self::Maintenance => "maintenance",
            Self::Registration => "registration",
            Self::Miscellaneous => "miscellaneous",
            Self::MaintenanceAtEnd => "maintenance at end",
            Self::FuelConsumption => "fuel consumption",
            Self::FuelPrice => "fuel price",
        };
        f.write_str(name)
    }
}
