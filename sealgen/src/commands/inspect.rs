use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sealgen_manifest::SealgenToml;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct InspectCommand {
    /// Path to sealgen.toml (defaults to ./sealgen.toml)
    #[arg(short, long, default_value = "sealgen.toml")]
    pub config: PathBuf,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let file = SealgenToml::open(&self.config).unwrap_or_exit();
        println!("{}", ops::inspect(file.manifest())?);
        Ok(())
    }
}
