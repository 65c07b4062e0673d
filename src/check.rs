// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Batch mode: checks files on disk and prints the diagnostics.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use futures::future::join_all;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};
use walkdir::WalkDir;

use crate::{
    diagnostics::compute_diagnostics,
    dialect::Dialect,
    error::{Error, Result},
    messages::Language,
};

pub struct CheckOptions {
    pub path: PathBuf,
    pub language: Language,
}

/// Parses `--check <path> [--lang en|hi]`. Returns `None` when the server
/// should run instead.
pub fn parse_args(args: &[String]) -> Result<Option<CheckOptions>> {
    let Some(index) = args.iter().position(|arg| arg == "--check") else {
        return Ok(None);
    };
    let path = args
        .get(index + 1)
        .filter(|arg| !arg.starts_with("--"))
        .ok_or_else(|| {
            Error::General("Usage: hover-errors-language-server --check <path> [--lang en|hi]".to_string())
        })?;

    let language = match args.iter().position(|arg| arg == "--lang") {
        Some(index) => args
            .get(index + 1)
            .ok_or_else(|| Error::General("--lang requires a value".to_string()))?
            .parse()?,
        None => Language::default(),
    };

    Ok(Some(CheckOptions {
        path: PathBuf::from(path),
        language,
    }))
}

/// Returns the checkable source files under `root`, or `root` itself if it is
/// a file. Entries that cannot be read, including a missing `root`, are
/// returned as errors.
pub fn find_source_files(root: &Path) -> impl Iterator<Item = Result<(PathBuf, Dialect)>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with('.') || name == "node_modules"))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    return None;
                }
                let dialect = Dialect::from_path(entry.path())?;
                Some(Ok((entry.into_path(), dialect)))
            }
            Err(err) => Some(Err(Error::General(err.to_string()))),
        })
}

pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Some(DiagnosticSeverity::ERROR))
            .count()
    }

    pub fn format(&self) -> String {
        self.diagnostics
            .iter()
            .map(|diagnostic| {
                let severity = if diagnostic.severity == Some(DiagnosticSeverity::WARNING) {
                    "warning"
                } else {
                    "error"
                };
                format!(
                    "{}:{}:{}: {}: {}\n",
                    self.path.display(),
                    diagnostic.range.start.line + 1,
                    diagnostic.range.start.character + 1,
                    severity,
                    diagnostic.message
                )
            })
            .collect()
    }
}

async fn check_file(path: PathBuf, dialect: Dialect, language: Language) -> Result<FileReport> {
    let text = tokio::fs::read_to_string(&path).await?;
    let diagnostics = compute_diagnostics(dialect, &text, language);
    Ok(FileReport { path, diagnostics })
}

pub async fn check_files(options: &CheckOptions) -> Vec<Result<FileReport>> {
    let tasks = find_source_files(&options.path).map(|file| {
        let language = options.language;
        tokio::spawn(async move {
            let (path, dialect) = file?;
            check_file(path, dialect, language).await
        })
    });

    join_all(tasks)
        .await
        .into_iter()
        .map(|joined| joined.unwrap_or_else(|err| Err(Error::General(err.to_string()))))
        .collect()
}

/// Runs the batch mode. Returns whether no errors were found.
pub async fn run_check(options: &CheckOptions) -> bool {
    let start_time = Instant::now();
    let mut files = 0;
    let mut errors = 0;
    let mut warnings = 0;

    for report in check_files(options).await {
        let report = match report {
            Ok(report) => report,
            Err(err) => {
                tracing::error!("Failed to check: {err}");
                errors += 1;
                continue;
            }
        };
        files += 1;
        let file_errors = report.error_count();
        errors += file_errors;
        warnings += report.diagnostics.len() - file_errors;
        tracing::debug!("Checked {}", report.path.display());
        print!("{}", report.format());
    }

    eprintln!(
        "Checked {} files in {:.1}s: {} errors, {} warnings",
        files,
        start_time.elapsed().as_secs_f64(),
        errors,
        warnings
    );
    errors == 0
}
