//! File pattern resolution using glob

use super::InputSource;
use crate::error::{CliError, CliResult};
use anyhow::Context;
use glob::glob;

/// Resolve input arguments to sources.
///
/// No arguments, or a bare `-`, selects standard input. Other arguments are
/// glob patterns; matched files are sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> CliResult<Vec<InputSource>> {
    if patterns.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }
    Ok(sources)
}
