//! Subcommands of `status-sim`.

mod inspect;
mod run;

pub use inspect::{Inspect, ListSaves};
pub use run::Run;

use std::path::PathBuf;

use clap::Args;
use status_runtime::{FileStateRepository, SaveFormat};

/// Arguments shared by every command that touches save files.
#[derive(Args, Clone)]
pub struct SaveArgs {
    /// Directory holding save slots (defaults to platform-specific location)
    #[arg(long, value_name = "DIR", env = "STATUS_SAVE_DIR")]
    pub save_dir: Option<PathBuf>,

    /// Encoding of save files
    #[arg(long, value_enum, default_value = "json")]
    pub format: FormatArg,
}

impl SaveArgs {
    pub fn repository(&self) -> anyhow::Result<FileStateRepository> {
        let dir = self.save_dir.clone().unwrap_or_else(crate::dirs::save_dir);
        Ok(FileStateRepository::new(dir, self.format.into())?)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FormatArg {
    /// Structured JSON record
    Json,
    /// Little-endian binary stream
    Binary,
}

impl From<FormatArg> for SaveFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => SaveFormat::Json,
            FormatArg::Binary => SaveFormat::Binary,
        }
    }
}
