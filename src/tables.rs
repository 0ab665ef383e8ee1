use std::{fmt::Display, iter::once};

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::core::{FuelMode, Powertrain, PresetBook, VehicleProfile, calculate};

/// Side-by-side comparison of the vehicles, one column per vehicle.
#[allow(clippy::too_many_lines)]
pub fn build_comparison_table(profiles: &[VehicleProfile]) -> Table {
    let breakdowns = profiles.iter().map(calculate).collect_vec();
    let cheapest = breakdowns.iter().position_min_by_key(|breakdown| breakdown.total_cost);

    let mut table = new_table();
    table.set_header(
        once(Cell::new(""))
            .chain(profiles.iter().enumerate().map(|(i, profile)| {
                Cell::new(format!("#{} {}", i + 1, profile.name)).add_attribute(Attribute::Bold)
            }))
            .collect_vec(),
    );

    table.add_row(row(
        "Powertrain",
        profiles.iter().map(|profile| Cell::new(profile.powertrain).fg(profile.powertrain.color())),
    ));
    table.add_row(row("Fuel mode", profiles.iter().map(|profile| Cell::new(profile.fuel_mode))));
    table.add_row(row("Car price", profiles.iter().map(|profile| number(profile.car_price))));
    table.add_row(row("Discount", profiles.iter().map(|profile| number(profile.discount))));
    table.add_row(row(
        "Other discount",
        profiles.iter().map(|profile| number(profile.other_discount)),
    ));
    table.add_row(row(
        "Net car price",
        breakdowns.iter().map(|breakdown| number(breakdown.net_car_price).add_attribute(Attribute::Bold)),
    ));
    table.add_row(row("Resale", profiles.iter().map(|profile| number(profile.resale))));
    table.add_row(row(
        "Resale value",
        breakdowns.iter().map(|breakdown| number(breakdown.resale_value)),
    ));
    table.add_row(row("Distance per year", profiles.iter().map(|profile| number(profile.km_per_year))));
    table.add_row(row(
        "Holding period",
        profiles.iter().map(|profile| number(format!("{} years", profile.years))),
    ));
    table.add_row(row(
        "Consumption",
        profiles.iter().map(|profile| {
            number(format!("{} {}", profile.fuel_consumption, profile.powertrain.consumption_unit()))
        }),
    ));
    table.add_row(row(
        "Fuel price",
        profiles
            .iter()
            .map(|profile| number(format!("{}{}", profile.fuel_price, profile.powertrain.price_unit()))),
    ));
    table.add_row(row("Fuel per km", breakdowns.iter().map(|breakdown| number(breakdown.fuel_per_km))));
    table.add_row(row(
        "Fuel per year",
        breakdowns.iter().map(|breakdown| number(breakdown.fuel_per_year)),
    ));
    table.add_row(row("Insurance", profiles.iter().map(|profile| number(profile.insurance))));
    table.add_row(row("Maintenance", profiles.iter().map(|profile| number(profile.maintenance))));
    table.add_row(row("Registration", profiles.iter().map(|profile| number(profile.registration))));
    table.add_row(row(
        "Miscellaneous",
        profiles.iter().map(|profile| number(profile.miscellaneous)),
    ));
    table.add_row(row(
        "Yearly cost",
        breakdowns.iter().map(|breakdown| number(breakdown.yearly_cost).add_attribute(Attribute::Bold)),
    ));
    table.add_row(row(
        "Maintenance at end",
        profiles.iter().map(|profile| number(profile.maintenance_at_end)),
    ));
    table.add_row(row(
        "Total cost",
        breakdowns.iter().enumerate().map(|(i, breakdown)| {
            number(breakdown.total_cost).add_attribute(Attribute::Bold).fg(
                if profiles.len() == 1 {
                    Color::Reset
                } else if Some(i) == cheapest {
                    Color::Green
                } else {
                    Color::Red
                },
            )
        }),
    ));
    table.add_row(row(
        "Cost per year",
        breakdowns.iter().map(|breakdown| number(breakdown.cost_per_year)),
    ));
    table.add_row(row(
        "Cost per km",
        breakdowns.iter().map(|breakdown| number(breakdown.cost_per_km)),
    ));
    table
}

/// Built-in or loaded presets, one column per powertrain.
pub fn build_presets_table(book: &PresetBook) -> Table {
    let powertrains = EnumSet::<Powertrain>::all().iter().collect_vec();

    let mut table = new_table();
    table.set_header(
        once(Cell::new(""))
            .chain(powertrains.iter().map(|powertrain| {
                Cell::new(powertrain).fg(powertrain.color()).add_attribute(Attribute::Bold)
            }))
            .collect_vec(),
    );
    let columns = || powertrains.iter().map(|powertrain| (*powertrain, book.powertrain(*powertrain)));

    table.add_row(row("Insurance", columns().map(|(_, preset)| number(preset.insurance))));
    table.add_row(row("Maintenance", columns().map(|(_, preset)| number(preset.maintenance))));
    table.add_row(row("Registration", columns().map(|(_, preset)| number(preset.registration))));
    table.add_row(row("Miscellaneous", columns().map(|(_, preset)| number(preset.miscellaneous))));
    table.add_row(row(
        "Maintenance at end",
        columns().map(|(_, preset)| number(preset.maintenance_at_end)),
    ));
    table.add_row(row("Resale", columns().map(|(_, preset)| number(preset.resale))));
    table.add_row(row(
        "Fuel price",
        columns().map(|(powertrain, _)| {
            number(format!("{}{}", book.fuel_price(powertrain), powertrain.price_unit()))
        }),
    ));
    for fuel_mode in EnumSet::<FuelMode>::all() {
        table.add_row(row(
            &format!("{fuel_mode} consumption"),
            columns().map(|(powertrain, preset)| {
                number(format!(
                    "{} {}",
                    preset.consumption.get(fuel_mode),
                    powertrain.consumption_unit(),
                ))
            }),
        ));
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn row(label: &str, cells: impl IntoIterator<Item = Cell>) -> Vec<Cell> {
    once(Cell::new(label).add_attribute(Attribute::Dim)).chain(cells).collect()
}

fn number(value: impl Display) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}
