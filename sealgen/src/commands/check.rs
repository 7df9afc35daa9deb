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
pub struct CheckCommand {
    /// Path to sealgen.toml (defaults to ./sealgen.toml)
    #[arg(short, long, default_value = "sealgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = SealgenToml::open(&self.config).unwrap_or_exit();
        ops::check(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
