pub mod calculator;
pub mod fuel_mode;
pub mod garage;
pub mod powertrain;
pub mod preset;
pub mod profile;
pub mod update;

pub use self::{
    calculator::{Breakdown, calculate},
    fuel_mode::FuelMode,
    garage::Garage,
    powertrain::Powertrain,
    preset::PresetBook,
    profile::VehicleProfile,
    update::{Field, Update},
};
