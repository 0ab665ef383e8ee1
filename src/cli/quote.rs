use std::{convert::Infallible, slice};

use clap::Parser;
use serde::Serialize;

use crate::{
    core::{Breakdown, Field, FuelMode, Powertrain, PresetBook, Update, VehicleProfile, calculate},
    input::{parse_number, to_count},
    prelude::*,
    quantity::{
        distance::Kilometers,
        fuel::{Consumption, EnergyPrice},
        money::Money,
        percentage::Percentage,
    },
    tables::build_comparison_table,
};

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(long, default_value = "Car 1")]
    name: String,

    /// Selects the running cost presets.
    #[clap(long, default_value = "ice", env = "CARCOST_POWERTRAIN")]
    powertrain: Powertrain,

    /// Selects the fuel consumption preset. Setting `--fuel-consumption` implies `custom`.
    #[clap(long, default_value = "city", env = "CARCOST_FUEL_MODE")]
    fuel_mode: FuelMode,

    #[clap(flatten)]
    fields: FieldArgs,

    /// Print the profile and the breakdown as JSON instead of the table.
    #[clap(long)]
    json: bool,
}

/// Overrides for the preset and default values.
///
/// Values are parsed leniently: grouping commas and negative numbers are allowed, and anything
/// unparseable is zero.
#[derive(Parser)]
struct FieldArgs {
    #[clap(long, allow_hyphen_values = true)]
    car_price: Option<Money>,

    #[clap(long, allow_hyphen_values = true)]
    discount: Option<Money>,

    #[clap(long, allow_hyphen_values = true)]
    other_discount: Option<Money>,

    /// Expected resale value as a percentage of the car price.
    #[clap(long, allow_hyphen_values = true)]
    resale_percent: Option<Percentage>,

    #[clap(long, allow_hyphen_values = true, env = "CARCOST_KM_PER_YEAR")]
    km_per_year: Option<Kilometers>,

    /// Holding period.
    #[clap(long, allow_hyphen_values = true, env = "CARCOST_YEARS", value_parser = parse_years)]
    years: Option<u32>,

    /// Yearly insurance premium.
    #[clap(long, allow_hyphen_values = true)]
    insurance: Option<Money>,

    /// Yearly maintenance cost.
    #[clap(long, allow_hyphen_values = true)]
    maintenance: Option<Money>,

    /// Yearly registration fee.
    #[clap(long, allow_hyphen_values = true)]
    registration: Option<Money>,

    /// Other yearly costs.
    #[clap(long, allow_hyphen_values = true)]
    miscellaneous: Option<Money>,

    /// One-time cost at the end of the holding period.
    #[clap(long, allow_hyphen_values = true)]
    maintenance_at_end: Option<Money>,

    /// Kilometers per liter, or kilowatt-hours per 100 km for an EV.
    #[clap(long, allow_hyphen_values = true)]
    fuel_consumption: Option<Consumption>,

    /// Price per liter, or per kilowatt-hour for an EV.
    #[clap(long, allow_hyphen_values = true, env = "CARCOST_FUEL_PRICE")]
    fuel_price: Option<EnergyPrice>,
}

impl FieldArgs {
    fn updates(&self) -> impl Iterator<Item = Update> {
        [
            (Field::CarPrice, self.car_price.map(|value| value.0)),
            (Field::Discount, self.discount.map(|value| value.0)),
            (Field::OtherDiscount, self.other_discount.map(|value| value.0)),
            (Field::ResalePercent, self.resale_percent.map(|value| value.0)),
            (Field::KmPerYear, self.km_per_year.map(|value| value.0)),
            (Field::Years, self.years.map(f64::from)),
            (Field::Insurance, self.insurance.map(|value| value.0)),
            (Field::Maintenance, self.maintenance.map(|value| value.0)),
            (Field::Registration, self.registration.map(|value| value.0)),
            (Field::Miscellaneous, self.miscellaneous.map(|value| value.0)),
            (Field::MaintenanceAtEnd, self.maintenance_at_end.map(|value| value.0)),
            (Field::FuelConsumption, self.fuel_consumption.map(|value| value.0)),
            (Field::FuelPrice, self.fuel_price.map(|value| value.0)),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some(Update::Set(field, value?)))
    }
}

#[allow(clippy::unnecessary_wraps)]
fn parse_years(text: &str) -> Result<u32, Infallible> {
    Ok(to_count(parse_number(text)))
}

#[derive(Serialize)]
struct Quote<'a> {
    profile: &'a VehicleProfile,
    breakdown: Breakdown,
}

impl QuoteArgs {
    #[instrument(skip_all, fields(powertrain = %self.powertrain, fuel_mode = %self.fuel_mode))]
    pub fn run(&self, book: &PresetBook) -> Result {
        let profile = self.profile(book);
        let breakdown = calculate(&profile);
        info!(total_cost = %breakdown.total_cost, "calculated");

        if self.json {
            let quote = Quote { profile: &profile, breakdown };
            println!("{}", serde_json::to_string_pretty(&quote)?);
        } else {
            println!("{}", build_comparison_table(slice::from_ref(&profile)));
        }
        Ok(())
    }

    fn profile(&self, book: &PresetBook) -> VehicleProfile {
        VehicleProfile::new(self.name.clone(), self.powertrain, book)
            .with(Update::FuelMode(self.fuel_mode), book)
            .with_all(self.fields.updates(), book)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::once;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[derive(Parser)]
    struct TestArgs {
        #[clap(flatten)]
        quote: QuoteArgs,
    }

    fn parse(args: &[&str]) -> Result<QuoteArgs> {
        Ok(TestArgs::try_parse_from(once("quote").chain(args.iter().copied()))?.quote)
    }

    #[test]
    fn test_defaults() -> Result {
        let book = PresetBook::default();
        let profile = parse(&[])?.profile(&book);
        assert_eq!(profile, VehicleProfile::new("Car 1", Powertrain::Ice, &book));
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result {
        let book = PresetBook::default();
        let profile = parse(&[
            "--car-price",
            "1,000,000",
            "--resale-percent",
            "30",
            "--km-per-year",
            "20,000",
            "--years",
            "10",
            "--insurance",
            "22,000",
            "--maintenance",
            "8,000",
            "--registration",
            "2,500",
            "--fuel-price",
            "33",
            "--fuel-consumption",
            "15",
        ])?
        .profile(&book);
        assert_eq!(profile.fuel_mode, FuelMode::Custom);
        assert_abs_diff_eq!(calculate(&profile).total_cost.0, 1_465_000.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_lenient_values() -> Result {
        let book = PresetBook::default();
        let profile = parse(&["--discount", "abc", "--years", "ten"])?.profile(&book);
        assert_eq!(profile.discount, Money::ZERO);
        assert_eq!(profile.years, 0);
        Ok(())
    }

    #[test]
    fn test_negative_values() -> Result {
        let book = PresetBook::default();
        let profile = parse(&["--miscellaneous", "-500", "--discount", "-", "--years", "-3"])?
            .profile(&book);
        assert_abs_diff_eq!(profile.miscellaneous.0, -500.0);
        assert_eq!(profile.discount, Money::ZERO);
        assert_eq!(profile.years, 0);
        Ok(())
    }

    #[test]
    fn test_electric_highway() -> Result {
        let book = PresetBook::default();
        let profile = parse(&["--powertrain", "ev", "--fuel-mode", "highway"])?.profile(&book);
        assert_eq!(profile.fuel_consumption, book.ev.consumption.highway);
        assert_eq!(profile.fuel_price, book.fuel_price.electric);
        Ok(())
    }

    #[test]
    fn test_json() -> Result {
        let book = PresetBook::default();
        let profile = parse(&[])?.profile(&book);
        let quote = Quote { profile: &profile, breakdown: calculate(&profile) };
        let value = serde_json::to_value(&quote)?;
        assert_eq!(value["profile"]["powertrain"], "ice");
        assert_eq!(value["profile"]["fuel_mode"], "city");
        assert!(value["breakdown"]["total_cost"].is_number());
        Ok(())
    }
}
