//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use cnlex_core::LexConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Model path written into the template
    #[arg(short, long, value_name = "PATH", default_value = "crf2.model")]
    pub model: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, LexConfig::template(&self.model))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point crf2_model at a trained model");
        println!("2. Validate your configuration:");
        println!("   cnlex validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!("   cnlex process -c {} -i input.txt", self.output.display());

        Ok(())
    }
}
