use anyhow::{Context, Result};
use crate::color_swap::ColorSwap;
use crate::local_files::{FileSystem, LocalFs};
use std::path::Path;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content contained no old color, nothing was written
    Unchanged,
    /// File was rewritten
    Updated { replacements: usize },
    /// Dry run: file would be rewritten
    WouldUpdate {
        replacements: usize,
        original: String,
        modified: String,
    },
}

pub struct FileProcessor<F = LocalFs> {
    swap: ColorSwap,
    fs: F,
    dry_run: bool,
}

impl FileProcessor {
    pub fn new(swap: ColorSwap) -> Self {
        Self::with_fs(swap, LocalFs::new())
    }
}

impl<F: FileSystem> FileProcessor<F> {
    pub fn with_fs(swap: ColorSwap, fs: F) -> Self {
        Self { swap, fs, dry_run: false }
    }

    /// Preview changes without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn swap(&self) -> &ColorSwap {
        &self.swap
    }

    /// Read the whole file, swap colors in memory, and write it back only if it changed.
    ///
    /// The file is truncated and rewritten in place, never backed up.
    pub fn replace_in_file(&self, file_path: &Path) -> Result<FileOutcome> {
        let content = self.fs.read(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

        let Some(swapped) = self.swap.apply(&content) else {
            return Ok(FileOutcome::Unchanged);
        };

        if self.dry_run {
            return Ok(FileOutcome::WouldUpdate {
                replacements: swapped.replacements,
                original: content,
                modified: swapped.content,
            });
        }

        self.fs.write(file_path, &swapped.content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(FileOutcome::Updated {
            replacements: swapped.replacements,
        })
    }
}
