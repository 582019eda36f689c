//! Tagger backend selection

#[cfg(not(feature = "crfsuite"))]
use crate::error::CliError;
use crate::error::CliResult;
use cnlex_core::{LexConfig, SequenceTagger};

/// Tagger instance owned by one worker
pub type BoxedTagger<'a> = Box<dyn SequenceTagger + 'a>;

/// Tagging backend loaded once and shared by all workers
#[derive(Debug)]
pub struct TaggerBackend {
    #[cfg(feature = "crfsuite")]
    model: cnlex_core::CrfSuiteModel,
}

#[cfg(feature = "crfsuite")]
impl TaggerBackend {
    /// Load the configured model
    pub fn load(config: &LexConfig) -> CliResult<Self> {
        use anyhow::Context;

        let path = config.model_path()?;
        let model = cnlex_core::CrfSuiteModel::from_file(path)
            .with_context(|| format!("Failed to load model: {}", path.display()))?;
        Ok(Self { model })
    }

    /// Build a tagger for one worker
    pub fn tagger(&self) -> CliResult<BoxedTagger<'_>> {
        Ok(Box::new(self.model.tagger()?))
    }
}

#[cfg(not(feature = "crfsuite"))]
impl TaggerBackend {
    /// Load the configured model
    pub fn load(config: &LexConfig) -> CliResult<Self> {
        config.model_path()?;
        Err(unavailable())
    }

    /// Build a tagger for one worker
    pub fn tagger(&self) -> CliResult<BoxedTagger<'_>> {
        Err(unavailable())
    }
}

#[cfg(not(feature = "crfsuite"))]
fn unavailable() -> anyhow::Error {
    CliError::TaggerUnavailable(
        "cnlex was built without a tagger backend; rebuild with --features crfsuite".into(),
    )
    .into()
}

/// Name of the compiled-in backend
pub fn backend_name() -> &'static str {
    if cfg!(feature = "crfsuite") {
        "crfsuite"
    } else {
        "none"
    }
}
