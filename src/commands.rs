//! CLI command implementations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use rayon::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::constants::output::{ORDER_EXTENSION, SOURCE_EXTENSIONS};
use crate::error::Result;
use crate::order::{parse_document, to_interchange, ParseOutcome};
use crate::source::read_source;
use crate::types::ServiceDocument;

/// Characters of content shown per item by `inspect`.
const PREVIEW_CHARS: usize = 50;

/// A bulletin parsed and rendered, not yet written.
#[derive(Debug)]
pub struct Converted {
    /// Bulletin the document came from.
    pub source: PathBuf,
    /// Parsed document and warnings.
    pub outcome: ParseOutcome,
    /// Rendered interchange document.
    pub yaml: String,
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Run a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
    tracing::debug!("{} v{}", config.app_name(), config.app_version());

    match cli.command {
        Commands::Convert { inputs, output_dir, stdout } => {
            let config = config.with_output_dir(output_dir.as_deref())?;
            convert(&inputs, &config, stdout)
        }
        Commands::Inspect { input, json } => inspect(&input, json),
        Commands::Check { file } => check(&file),
    }
}

/// Expand directories into the bulletin files they contain, sorted.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| is_source_file(p))
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Read, parse and render one bulletin.
pub fn convert_file(path: &Path) -> Result<Converted> {
    let text = read_source(path)?;
    let outcome = parse_document(&text);
    let yaml = to_interchange(&outcome.document);
    Ok(Converted { source: path.to_path_buf(), outcome, yaml })
}

/// Output file for a converted bulletin, `<date>.yaml`, falling back to
/// `<date>-<source stem>.yaml` and then `<date>-<source stem>-<n>.yaml`
/// when other bulletins already took the name.
pub fn output_path(dir: &Path, converted: &Converted, taken: &mut HashSet<PathBuf>) -> PathBuf {
    let date = &converted.outcome.document.date;
    let primary = dir.join(format!("{date}.{ORDER_EXTENSION}"));
    if taken.insert(primary.clone()) {
        return primary;
    }

    let stem = converted
        .source
        .file_stem()
        .map_or_else(|| "order".to_string(), |s| s.to_string_lossy().into_owned());
    let mut candidate = dir.join(format!("{date}-{stem}.{ORDER_EXTENSION}"));
    let mut n = 2usize;
    while !taken.insert(candidate.clone()) {
        candidate = dir.join(format!("{date}-{stem}-{n}.{ORDER_EXTENSION}"));
        n += 1;
    }
    candidate
}

fn convert(inputs: &[PathBuf], config: &Config, stdout: bool) -> anyhow::Result<()> {
    let files = collect_inputs(inputs);
    if files.is_empty() {
        bail!("No .txt or .docx bulletins found in the given inputs");
    }

    // Documents are independent, so parse them in parallel and write in order.
    let results: Vec<(PathBuf, Result<Converted>)> = files
        .par_iter()
        .map(|path| (path.clone(), convert_file(path)))
        .collect();

    if !stdout {
        fs_err::create_dir_all(&config.output_dir)?;
    }

    let mut taken = HashSet::new();
    let mut written = 0usize;
    let mut failed = 0usize;

    for (path, result) in results {
        let converted = match result {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                failed += 1;
                continue;
            }
        };

        if !converted.outcome.has_order() {
            warn!("Skipping {}: no order of service found", path.display());
            failed += 1;
            continue;
        }

        if stdout {
            println!("{}", converted.yaml);
        } else {
            let out = output_path(&config.output_dir, &converted, &mut taken);
            fs_err::write(&out, &converted.yaml)?;
            info!(
                "Created {} ({} items) from {}",
                out.display(),
                converted.outcome.document.items.len(),
                path.display()
            );
        }
        written += 1;
    }

    info!("Converted {written} bulletin(s), {failed} skipped");
    if written == 0 {
        bail!("No bulletins were converted");
    }
    Ok(())
}

fn inspect(input: &Path, json: bool) -> anyhow::Result<()> {
    let converted = convert_file(input)?;
    let doc = &converted.outcome.document;

    if json {
        println!("{}", serde_json::to_string_pretty(doc)?);
        return Ok(());
    }

    println!("Service Date: {}", doc.date);
    println!("Theme: {}", doc.theme);
    if let Some(speaker) = &doc.speaker {
        println!("Speaker: {speaker}");
    }
    for warning in &converted.outcome.warnings {
        println!("Warning: {warning}");
    }
    println!("{}", summarize(doc));
    Ok(())
}

fn check(file: &Path) -> anyhow::Result<()> {
    let text = fs_err::read_to_string(file)?;
    let doc = ServiceDocument::from_yaml(&text).map_err(|e| e.with_file(file))?;
    println!("{}: {} on {}", file.display(), doc.theme, doc.date);
    println!("{}", summarize(&doc));
    Ok(())
}

/// Numbered item listing with type, presenter and a content preview.
pub fn summarize(doc: &ServiceDocument) -> String {
    let mut lines = vec![format!("{} service items", doc.items.len())];

    for (i, item) in doc.items.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} ({}, {})",
            i + 1,
            item.title,
            item.slide_type,
            item.slide_type.background_file()
        ));
        if let Some(presenter) = item.presenter_name() {
            lines.push(format!("    Presenter: {presenter}"));
        }
        if let Some(minutes) = item.countdown_minutes() {
            lines.push(format!("    Countdown: {minutes} min"));
        }
        if let Some(number) = item.hymn_number() {
            lines.push(format!("    Hymn: #{number}"));
        }
        if let Some(reference) = &item.reference {
            lines.push(format!("    Reference: {reference}"));
        }
        if let Some(passage) = item.scripture_ref() {
            let verses = passage
                .end_verse
                .map_or_else(|| passage.start_verse.to_string(), |end| format!("{}-{end}", passage.start_verse));
            lines.push(format!(
                "    Passage: {}, chapter {}, verses {verses}",
                passage.book, passage.chapter
            ));
        }
        if !item.content.is_empty() {
            let mut preview: String = item.content.chars().take(PREVIEW_CHARS).collect();
            preview = preview.replace('\n', " ");
            if item.content.chars().count() > PREVIEW_CHARS {
                preview.push_str("...");
            }
            lines.push(format!("    Content: {preview}"));
        }
    }

    lines.join("\n")
}
