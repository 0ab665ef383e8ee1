#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod fmt;
mod input;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let book = args.preset_book()?;

    match args.command {
        Command::Quote(args) => args.run(&book)?,
        Command::Compare(args) => args.run(book)?,
        Command::Presets(args) => args.run(&book)?,
    }

    Ok(())
}
