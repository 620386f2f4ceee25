//! Read and inspect saved actor records.

use anyhow::{Context, Result};
use clap::Parser;
use status_runtime::StateRepository;

use super::SaveArgs;

/// Print a saved actor record
#[derive(Parser)]
pub struct Inspect {
    /// Slot to read
    #[arg(value_name = "SLOT")]
    slot: String,

    #[command(flatten)]
    save_args: SaveArgs,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let repo = self.save_args.repository()?;
        let record = repo
            .load(&self.slot)
            .with_context(|| format!("reading slot '{}'", self.slot))?
            .with_context(|| {
                format!(
                    "slot '{}' not found in {}",
                    self.slot,
                    repo.base_dir().display()
                )
            })?;

        println!("{}", serde_json::to_string_pretty(&record)?);
        Ok(())
    }
}

/// List saved slots
#[derive(Parser)]
pub struct ListSaves {
    #[command(flatten)]
    save_args: SaveArgs,
}

impl ListSaves {
    pub fn execute(self) -> Result<()> {
        let repo = self.save_args.repository()?;
        let slots = repo.list_slots()?;

        if slots.is_empty() {
            println!("no saves in {}", repo.base_dir().display());
        }
        for slot in slots {
            println!("{slot}");
        }
        Ok(())
    }
}
