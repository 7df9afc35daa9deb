use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sealgen_manifest::SealgenToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sealgen.toml (defaults to ./sealgen.toml)
    #[arg(short, long, default_value = "sealgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [output] directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = SealgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::generate(&file, self.output.as_deref(), self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
