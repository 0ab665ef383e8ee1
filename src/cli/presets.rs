use clap::Parser;

use crate::{core::PresetBook, prelude::*, tables::build_presets_table};

#[derive(Parser)]
pub struct PresetsArgs {
    /// Print the presets as TOML, ready to be edited and passed back with `--presets`.
    #[clap(long)]
    dump: bool,
}

impl PresetsArgs {
    pub fn run(&self, book: &PresetBook) -> Result {
        if self.dump {
            print!("{}", book.to_toml()?);
        } else {
            println!("{}", build_presets_table(book));
        }
        Ok(())
    }
}
