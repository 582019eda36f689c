//! Process command implementation

use crate::input::{decode_line, resolve_patterns, InputSource, LineReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::tagger::TaggerBackend;
use anyhow::{Context, Result};
use clap::Args;
use cnlex_core::{LexConfig, Lexizer, LexizerFactory, SequenceTagger, Token};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufWriter};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Segmenter configuration file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,

    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Input files given positionally
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Token separator for text output
    #[arg(short, long, default_value = " ")]
    pub separator: String,

    /// Segment files in parallel, one tagger per worker
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: all CPUs)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Log and skip lines that fail instead of aborting
    #[arg(long)]
    pub skip_errors: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line of separated tokens per input line
    Text,
    /// JSON array of lines with typed tokens
    Json,
}

/// Buffered output of one source: line numbers with their tokens
type SegmentedSource = (Vec<(usize, Vec<Token>)>, SourceStats);

/// Per-line error policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentOptions {
    /// Emit an empty line for failed lines instead of aborting
    pub skip_errors: bool,
}

/// Counters collected while segmenting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Lines read
    pub lines: usize,
    /// Tokens emitted
    pub tokens: usize,
    /// Lines skipped after an error
    pub skipped: usize,
    /// Lines that ended without a closing boundary
    pub inconsistencies: usize,
    /// Time spent inside the segmenter
    pub elapsed: Duration,
}

impl SourceStats {
    /// Add another source's counters
    pub fn merge(&mut self, other: SourceStats) {
        self.lines += other.lines;
        self.tokens += other.tokens;
        self.skipped += other.skipped;
        self.inconsistencies += other.inconsistencies;
        self.elapsed += other.elapsed;
    }
}

/// Segment every line from `reader`, passing each result to `emit`
pub fn segment_lines<R, T, F>(
    reader: &mut LineReader<R>,
    name: &str,
    lexizer: &mut Lexizer<T>,
    options: &SegmentOptions,
    mut emit: F,
) -> Result<SourceStats>
where
    R: BufRead,
    T: SequenceTagger,
    F: FnMut(usize, &[Token]) -> Result<()>,
{
    let mut stats = SourceStats::default();

    loop {
        let line_no = reader.line_number() + 1;
        let Some(bytes) = reader
            .next_line()
            .with_context(|| format!("Failed to read {name}"))?
        else {
            break;
        };
        stats.lines += 1;

        let started = Instant::now();
        let result = decode_line(bytes, line_no).and_then(|text| lexizer.process(text));
        stats.elapsed += started.elapsed();

        let tokens = match result {
            Ok(tokens) => tokens,
            Err(e) if e.is_recoverable() => {
                log::warn!("{name}:{line_no}: {e}");
                stats.inconsistencies += 1;
                e.into_tokens().unwrap_or_default()
            }
            Err(e) if options.skip_errors => {
                log::warn!("{name}:{line_no}: skipping line: {e}");
                stats.skipped += 1;
                Vec::new()
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("{name}: line {line_no}")));
            }
        };

        stats.tokens += tokens.len();
        emit(line_no, &tokens)?;
    }

    Ok(stats)
}

/// Open `source` and segment it
pub fn segment_source<T, F>(
    source: &InputSource,
    lexizer: &mut Lexizer<T>,
    options: &SegmentOptions,
    emit: F,
) -> Result<SourceStats>
where
    T: SequenceTagger,
    F: FnMut(usize, &[Token]) -> Result<()>,
{
    let mut reader = LineReader::new(source.open()?);
    let stats = segment_lines(&mut reader, &source.name(), lexizer, options, emit)?;
    log::debug!("{}: {} lines, {} tokens", source, stats.lines, stats.tokens);
    Ok(stats)
}

/// Segment all sources in order and write them to `formatter`.
///
/// With `threads` set, sources are segmented on a rayon pool with one
/// tagger per source; output order still follows `sources`.
pub fn run_sources<T, M>(
    sources: &[InputSource],
    factory: &LexizerFactory,
    make_tagger: M,
    formatter: &mut dyn OutputFormatter,
    options: &SegmentOptions,
    threads: Option<usize>,
    progress: &ProgressReporter,
) -> Result<SourceStats>
where
    T: SequenceTagger,
    M: Fn() -> Result<T> + Sync,
{
    let mut stats = SourceStats::default();

    let Some(threads) = threads else {
        let mut lexizer = factory.build(make_tagger()?);
        for source in sources {
            let name = source.name();
            let source_stats = segment_source(source, &mut lexizer, options, |line, tokens| {
                formatter.format_line(&name, line, tokens)
            })?;
            stats.merge(source_stats);
            progress.file_completed(&name);
        }
        return Ok(stats);
    };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;

    let results: Vec<Result<SegmentedSource>> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| -> Result<SegmentedSource> {
                let mut lexizer = factory.build(make_tagger()?);
                let mut lines = Vec::new();
                let source_stats = segment_source(source, &mut lexizer, options, |line, tokens| {
                    lines.push((line, tokens.to_vec()));
                    Ok(())
                })?;
                progress.file_completed(&source.name());
                Ok((lines, source_stats))
            })
            .collect()
    });

    for (source, result) in sources.iter().zip(results) {
        let (lines, source_stats) = result?;
        let name = source.name();
        for (line, tokens) in lines {
            formatter.format_line(&name, line, &tokens)?;
        }
        stats.merge(source_stats);
    }

    Ok(stats)
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = LexConfig::from_file(&self.config)
            .with_context(|| format!("Failed to load configuration: {}", self.config.display()))?;
        let factory = LexizerFactory::from_config(&config);

        let patterns: Vec<String> = self.input.iter().chain(&self.files).cloned().collect();
        let sources = resolve_patterns(&patterns)?;
        let threads = self.worker_threads(sources.len())?;
        let backend = TaggerBackend::load(&config)?;

        let mut formatter = self.create_formatter()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let options = SegmentOptions {
            skip_errors: self.skip_errors,
        };
        let stats = run_sources(
            &sources,
            &factory,
            || backend.tagger(),
            formatter.as_mut(),
            &options,
            threads,
            &progress,
        )?;
        formatter.finish()?;
        progress.finish();

        log::info!(
            "Segmented {} lines into {} tokens ({} skipped, {} unterminated)",
            stats.lines,
            stats.tokens,
            stats.skipped,
            stats.inconsistencies
        );
        log::info!("consumed time: {} ms", stats.elapsed.as_millis());

        Ok(())
    }

    /// Thread count for parallel runs; `None` runs sequentially
    fn worker_threads(&self, source_count: usize) -> Result<Option<usize>> {
        if let Some(0) = self.threads {
            anyhow::bail!("Thread count must be greater than 0");
        }
        if !self.parallel || source_count < 2 {
            return Ok(None);
        }
        Ok(Some(self.threads.unwrap_or_else(num_cpus::get)))
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let writer = BufWriter::new(file);
                match self.format {
                    OutputFormat::Text => Box::new(TextFormatter::new(writer, &self.separator)),
                    OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
                }
            }
            None => match self.format {
                OutputFormat::Text => Box::new(TextFormatter::stdout(&self.separator)),
                OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
            },
        };
        Ok(formatter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
