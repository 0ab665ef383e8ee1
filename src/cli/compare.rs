//! Interactive comparison session.
//!
//! Every line of the standard input is a single interaction. It is fully applied before the
//! next line is read.

use std::{
    io::{BufRead, IsTerminal, Write, stdin, stdout},
    ops::ControlFlow,
};

use clap::{Parser, Subcommand};
use itertools::Itertools;

use crate::{
    core::{Field, FuelMode, Garage, Powertrain, PresetBook, Update},
    input::parse_number,
    prelude::*,
    tables::build_comparison_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Powertrains of the vehicles to start with (one combustion vehicle by default).
    powertrains: Vec<Powertrain>,
}

impl CompareArgs {
    #[instrument(skip_all)]
    pub fn run(self, book: PresetBook) -> Result {
        let mut garage = Garage::new(book, self.powertrains);
        info!(n_vehicles = garage.len(), "session started, type `help` for the commands");
        println!("{}", build_comparison_table(garage.profiles()));

        let is_interactive = stdin().is_terminal();
        let mut lines = stdin().lock().lines();
        loop {
            if is_interactive {
                print!("> ");
                stdout().flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            let words = line.split_whitespace().collect_vec();
            if words.is_empty() {
                continue;
            }
            let command = match SessionLine::try_parse_from(words) {
                Ok(line) => line.command,
                Err(error) => {
                    error.print()?;
                    continue;
                }
            };
            match command.execute(&mut garage) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(error) => error!("{error:#}"),
            }
        }

        info!("session ended");
        Ok(())
    }
}

#[derive(Parser)]
#[command(multicall = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Vehicle positions start at 1.
#[derive(Subcommand)]
enum SessionCommand {
    /// Append a vehicle with the default values.
    Add { powertrain: Option<Powertrain> },

    /// Remove the vehicle, unless it is the only one.
    Remove { position: usize },

    /// Edit a numeric field. Grouping commas are allowed, invalid values become zero.
    Set {
        position: usize,
        field: Field,

        /// The rest of the line, with the spaces removed.
        #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
        value: Vec<String>,
    },

    /// Select the powertrain, overwriting the running costs with its presets.
    Powertrain { position: usize, powertrain: Powertrain },

    /// Select the fuel consumption preset.
    FuelMode { position: usize, fuel_mode: FuelMode },

    /// Change the vehicle label.
    Rename {
        position: usize,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Print the comparison.
    Show,

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

impl SessionCommand {
    fn execute(self, garage: &mut Garage) -> Result<ControlFlow<()>> {
        match self {
            Self::Add { powertrain } => {
                let index = garage.add(powertrain.unwrap_or(Powertrain::Ice));
                info!(position = index + 1, "added");
            }
            Self::Remove { position } => {
                if let Some(profile) = garage.remove(to_index(position)?)? {
                    info!(position, name = %profile.name, "removed");
                }
            }
            Self::Set { position, field, value } => {
                let value = parse_number(&value.concat());
                garage.update(to_index(position)?, Update::Set(field, value))?;
                debug!(position, %field, value, "set");
            }
            Self::Powertrain { position, powertrain } => {
                garage.update(to_index(position)?, Update::Powertrain(powertrain))?;
            }
            Self::FuelMode { position, fuel_mode } => {
                garage.update(to_index(position)?, Update::FuelMode(fuel_mode))?;
            }
            Self::Rename { position, name } => {
                garage.update(to_index(position)?, Update::Rename(name.join(" ")))?;
            }
            Self::Show => {}
            Self::Quit => return Ok(ControlFlow::Break(())),
        }
        println!("{}", build_comparison_table(garage.profiles()));
        if let Some(index) = garage.cheapest()
            && garage.len() > 1
        {
            info!(position = index + 1, "cheapest to own");
        }
        Ok(ControlFlow::Continue(()))
    }
}

fn to_index(position: usize) -> Result<usize> {
    position.checked_sub(1).context("vehicle positions start at 1")
}
