//! Validate command implementation

use crate::tagger::backend_name;
use anyhow::Result;
use clap::Args;
use cnlex_core::LexConfig;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the segmenter configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match LexConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        let sets = config.character_sets();
        println!("✓ Configuration is valid!");
        println!("  Chinese numerals: {}", sets.chinese_numerals.len());
        println!(
            "  Numeral continuations: {}",
            sets.chinese_numeral_continuation.len()
        );
        println!("  Chinese punctuation: {}", sets.chinese_punctuation.len());

        let ending_tags = config.ending_tags();
        let tags: Vec<&str> = ending_tags.iter().collect();
        println!("  Ending tags: {}", tags.join(", "));

        match config.model_path() {
            Ok(path) if path.is_file() => println!("  Model: {}", path.display()),
            Ok(path) => println!("  Model: {} (not found)", path.display()),
            Err(_) => println!("  Model: (not set)"),
        }
        println!("  Tagger backend: {}", backend_name());

        Ok(())
    }
}
