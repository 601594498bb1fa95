//! Command-line interface for wattcheck.

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::AnalysisEngine;
use crate::language::Language;
use crate::report::{self, FileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Energy anti-pattern linter.
///
/// Wattcheck scans source files and flags idioms known to waste CPU,
/// NIC, and memory energy: O(n²) sorting nests, heap allocation inside
/// loops, leak-shaped allocation imbalance, network calls inside loops,
/// busy-polling, and duplicate fetches of the same endpoint.
#[derive(Parser)]
#[command(name = "wattcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Force a language tag for all files instead of inferring from
    /// extensions (cpp, c, python, javascript, typescript)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Exit zero even when findings are present
    #[arg(long)]
    pub no_fail: bool,
}

/// Run a scan. Returns the process exit code.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    if let Some(tag) = &cli.language {
        if Language::parse(tag).is_none() {
            anyhow::bail!("unknown language tag: {:?}", tag);
        }
    }

    let files = collect_files(&cli.path, cli.language.as_deref())?;
    let engine = AnalysisEngine::with_default_detectors();

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|(path, language)| -> anyhow::Result<FileReport> {
            let code = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let findings = engine.analyze(&code, language.as_str());
            Ok(FileReport {
                file: path.display().to_string(),
                language: language.to_string(),
                findings,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    match cli.format.as_str() {
        "json" => report::write_json(&cli.path.display().to_string(), &reports)?,
        "pretty" => report::write_pretty(&reports),
        other => anyhow::bail!("unknown output format: {:?}", other),
    }

    let has_findings = reports.iter().any(|r| r.has_findings());
    if has_findings && !cli.no_fail {
        Ok(EXIT_FINDINGS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Collect `(path, language)` pairs under `path`. Files whose extension
/// maps to no supported language are skipped unless a language override
/// is given and `path` is a single file.
fn collect_files(
    path: &Path,
    language_override: Option<&str>,
) -> anyhow::Result<Vec<(PathBuf, Language)>> {
    let override_lang = language_override.and_then(Language::parse);

    if path.is_file() {
        let lang = override_lang.or_else(|| language_for(path));
        let Some(lang) = lang else {
            anyhow::bail!(
                "cannot infer language for {}; pass --language",
                path.display()
            );
        };
        return Ok(vec![(path.to_path_buf(), lang)]);
    }

    if !path.is_dir() {
        anyhow::bail!("no such file or directory: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let lang = match override_lang {
            Some(lang) => {
                if language_for(entry.path()).is_none() {
                    continue;
                }
                lang
            }
            None => match language_for(entry.path()) {
                Some(lang) => lang,
                None => continue,
            },
        };
        files.push((entry.path().to_path_buf(), lang));
    }
    Ok(files)
}

fn language_for(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
}
