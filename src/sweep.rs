//! The traversal: scan, swap each matching file, count the rewrites
//!
//! Every per-file failure is reported and counted as "not updated". Nothing a
//! single file does can stop the sweep, and neither can a broken console.

use crate::error_helpers::describe_failure;
use crate::file_processor::{FileOutcome, FileProcessor};
use crate::local_files::{FileSystem, LocalFs};
use crate::report::Reporter;
use crate::scanner::{ScanEntry, Scanner};
use std::fmt::Display;
use std::io::{self, Write};

/// Totals of one sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    /// Files that passed the extension filter
    pub visited: usize,
    /// Files rewritten (or, in a dry run, that would be)
    pub updated: usize,
    /// Matching files that could not be read or written
    pub failed: usize,
    /// Directory entries the walk could not read; logged, not printed
    pub skipped: usize,
    /// Total color occurrences swapped
    pub replacements: usize,
}

pub struct Sweep<F = LocalFs> {
    scanner: Scanner,
    processor: FileProcessor<F>,
    reporter: Reporter,
    dry_run: bool,
}

impl<F: FileSystem> Sweep<F> {
    pub fn new(scanner: Scanner, processor: FileProcessor<F>, reporter: Reporter, dry_run: bool) -> Self {
        Self {
            scanner,
            processor: processor.dry_run(dry_run),
            reporter,
            dry_run,
        }
    }

    /// Run against the process's stdout
    pub fn run(&self) -> SweepSummary {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    /// Run the sweep, writing update notices, error lines and the summary to `out`
    pub fn run_with<O: Write>(&self, out: &mut O) -> SweepSummary {
        let swap = self.processor.swap();
        tracing::info!(
            root = %self.scanner.root().display(),
            old = swap.old_value(),
            new = swap.new_value(),
            dry_run = self.dry_run,
            "Starting sweep"
        );

        let mut summary = SweepSummary::default();

        for entry in self.scanner.entries() {
            let path = match entry {
                ScanEntry::File(path) => path,
                ScanEntry::Unreadable { path, error } => {
                    summary.skipped += 1;
                    let shown = path.unwrap_or_else(|| self.scanner.root().to_path_buf());
                    tracing::warn!(path = %shown.display(), error = %error, "Skipping unreadable entry");
                    continue;
                }
            };

            summary.visited += 1;
            tracing::debug!(path = %path.display(), "Visiting file");

            match self.processor.replace_in_file(&path) {
                Ok(FileOutcome::Unchanged) => {}
                Ok(FileOutcome::Updated { replacements }) => {
                    summary.updated += 1;
                    summary.replacements += replacements;
                    tracing::info!(path = %path.display(), replacements, "Rewrote file");
                    emit_line(out, self.reporter.format_updated(&path));
                }
                Ok(FileOutcome::WouldUpdate { replacements, original, modified }) => {
                    summary.updated += 1;
                    summary.replacements += replacements;
                    tracing::info!(path = %path.display(), replacements, "Would rewrite file");
                    emit(out, self.reporter.format_preview(&path, &original, &modified));
                }
                Err(e) => {
                    summary.failed += 1;
                    let reason = describe_failure(&e);
                    tracing::warn!(path = %path.display(), error = %reason, "Failed to process file");
                    emit_line(out, self.reporter.format_error(&path, &reason));
                }
            }
        }

        emit_line(out, self.reporter.format_summary(summary.updated, swap, self.dry_run));

        tracing::info!(
            visited = summary.visited,
            updated = summary.updated,
            failed = summary.failed,
            skipped = summary.skipped,
            replacements = summary.replacements,
            "Sweep finished"
        );

        summary
    }
}

// Console output is best effort: a closed pipe must not cut the sweep short
fn emit<O: Write>(out: &mut O, text: impl Display) {
    if let Err(e) = write!(out, "{}", text) {
        tracing::debug!(error = %e, "Console write failed");
    }
}

fn emit_line<O: Write>(out: &mut O, text: impl Display) {
    emit(out, format_args!("{}\n", text));
}
