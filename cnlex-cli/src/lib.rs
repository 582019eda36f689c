//! cnlex CLI library
//!
//! This library provides the command-line interface for the cnlex
//! word segmentation pipeline.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod tagger;

pub use error::{CliError, CliResult};
