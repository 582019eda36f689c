//! CRFsuite model backend
//!
//! Observation lines are split into columns (column 0 is the unit text,
//! column 1 its class label) and expanded into attributes with a fixed
//! window template:
//!
//! | attribute | value |
//! |---|---|
//! | `w[-1]=` | previous unit text |
//! | `w[0]=` | current unit text |
//! | `w[1]=` | next unit text |
//! | `w[-1]\|w[0]=` | previous and current text |
//! | `w[0]\|w[1]=` | current and next text |
//! | `c[0]=` | current class label |
//!
//! Positions outside the sequence read as `__BOS__` / `__EOS__`. Models
//! must be trained with the same template.
//!
//! A [`CrfSuiteModel`] owns the model bytes and is shared by every worker;
//! each worker parses it once into its own [`CrfSuiteTagger`].

use crate::error::{LexError, Result};
use crate::tagger::SequenceTagger;
use crfs::{Attribute, Model};
use std::path::Path;

const BOS: &str = "__BOS__";
const EOS: &str = "__EOS__";

/// Validated CRFsuite model bytes
#[derive(Debug, Clone)]
pub struct CrfSuiteModel {
    data: Vec<u8>,
}

impl CrfSuiteModel {
    /// Load a model file
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            LexError::Configuration(format!(
                "Failed to read model '{}': {}",
                path.display(),
                e
            ))
        })?;
        let model = Self::from_bytes(data).map_err(|e| match e {
            LexError::Configuration(msg) => {
                LexError::Configuration(format!("{msg} ('{}')", path.display()))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded CRFsuite model");
        Ok(model)
    }

    /// Use an in-memory model
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        parse_model(&data)?;
        Ok(Self { data })
    }

    /// Create a tagger borrowing this model
    pub fn tagger(&self) -> Result<CrfSuiteTagger<'_>> {
        Ok(CrfSuiteTagger {
            model: parse_model(&self.data)?,
            rows: Vec::new(),
            tags: Vec::new(),
        })
    }
}

fn parse_model(data: &[u8]) -> Result<Model<'_>> {
    Model::new(data).map_err(|e| LexError::Configuration(format!("invalid CRFsuite model: {e}")))
}

fn cell(rows: &[Vec<String>], i: isize, col: usize) -> &str {
    if i < 0 {
        return BOS;
    }
    match rows.get(i as usize) {
        Some(row) => row.get(col).map(String::as_str).unwrap_or(""),
        None => EOS,
    }
}

/// Window feature names for each row of `rows`
fn window_features(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    (0..rows.len() as isize)
        .map(|i| {
            let prev = cell(rows, i - 1, 0);
            let cur = cell(rows, i, 0);
            let next = cell(rows, i + 1, 0);
            vec![
                format!("w[-1]={prev}"),
                format!("w[0]={cur}"),
                format!("w[1]={next}"),
                format!("w[-1]|w[0]={prev}|{cur}"),
                format!("w[0]|w[1]={cur}|{next}"),
                format!("c[0]={}", cell(rows, i, 1)),
            ]
        })
        .collect()
}

/// [`SequenceTagger`] over a model parsed once at construction
pub struct CrfSuiteTagger<'m> {
    model: Model<'m>,
    rows: Vec<Vec<String>>,
    tags: Vec<String>,
}

impl CrfSuiteTagger<'_> {
    fn run(&self) -> std::result::Result<Vec<String>, String> {
        let xseq: Vec<Vec<Attribute>> = window_features(&self.rows)
            .into_iter()
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| Attribute::new(name, 1.0))
                    .collect()
            })
            .collect();

        #[allow(unused_mut)]
        let mut tagger = self.model.tagger().map_err(|e| e.to_string())?;
        let tags = tagger.tag(&xseq).map_err(|e| e.to_string())?;
        Ok(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl SequenceTagger for CrfSuiteTagger<'_> {
    fn clear(&mut self) {
        self.rows.clear();
        self.tags.clear();
    }

    fn add(&mut self, line: &str) {
        self.rows
            .push(line.split_whitespace().map(str::to_owned).collect());
    }

    fn parse(&mut self) -> bool {
        self.tags.clear();
        if self.rows.is_empty() {
            return true;
        }

        match self.run() {
            Ok(tags) => {
                self.tags = tags;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "CRFsuite tagging failed");
                false
            }
        }
    }

    fn size(&self) -> usize {
        self.tags.len()
    }

    fn tag(&self, i: usize) -> Option<&str> {
        self.tags.get(i).map(String::as_str)
    }

    fn column(&self, i: usize, col: usize) -> Option<&str> {
        self.rows.get(i)?.get(col).map(String::as_str)
    }
}
