mod compare;
mod presets;
mod quote;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{compare::CompareArgs, presets::PresetsArgs, quote::QuoteArgs};
use crate::{core::PresetBook, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// TOML file overriding the built-in presets, see `presets --dump`.
    #[clap(long = "presets", env = "CARCOST_PRESETS", global = true)]
    pub presets: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn preset_book(&self) -> Result<PresetBook> {
        match &self.presets {
            Some(path) => PresetBook::read_from(path),
            None => Ok(PresetBook::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate the total cost of ownership of a single vehicle.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Compare vehicles interactively, reading the commands from the standard input.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// Show the presets applied on powertrain and fuel mode selection.
    #[clap(name = "presets")]
    Presets(PresetsArgs),
}
