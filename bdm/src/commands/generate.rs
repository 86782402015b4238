use std::path::PathBuf;

use bdm_codegen::Variant;
use bdm_model::BusinessObjectModel;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model file (defaults to ./bom.toml)
    #[arg(short, long, default_value = "bom.toml")]
    pub model: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generate plain client classes without persistence metadata
    #[arg(long)]
    pub client: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let model = BusinessObjectModel::from_file(&self.model).unwrap_or_exit();
        let variant = if self.client {
            Variant::Client
        } else {
            Variant::Server
        };

        let report = ops::generate(
            model,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                variant,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
