use std::path::PathBuf;

use bdm_model::BusinessObjectModel;
use clap::{Args, ValueEnum};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum CheckFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file (defaults to ./bom.toml)
    #[arg(short, long, default_value = "bom.toml")]
    pub model: PathBuf,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = CheckFormat::Text)]
    pub format: CheckFormat,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let model = BusinessObjectModel::from_file(&self.model).unwrap_or_exit();
        let report = ops::check(model, &self.model);

        match self.format {
            CheckFormat::Text => report.render(&mut TerminalOutput::new()),
            CheckFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
