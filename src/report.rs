use crate::color_swap::ColorSwap;
use colored::*;
use similar::{ChangeTag, TextDiff};
use std::io::IsTerminal;
use std::path::Path;

/// Renders the console lines of a sweep
pub struct Reporter {
    use_color: bool,
    context_lines: usize,
}

impl Reporter {
    pub fn new(use_color: bool, context_lines: usize) -> Self {
        Self {
            use_color,
            context_lines,
        }
    }

    /// Auto-detect if we should use colors
    pub fn should_use_color(enabled_in_config: bool) -> bool {
        if !enabled_in_config {
            return false;
        }

        // Check NO_COLOR env var (https://no-color.org/)
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }

        std::io::stdout().is_terminal()
    }

    pub fn format_updated(&self, path: &Path) -> String {
        if self.use_color {
            format!("{} Updated: {}", "✓".green().bold(), path.display())
        } else {
            format!("✓ Updated: {}", path.display())
        }
    }

    pub fn format_error(&self, path: &Path, reason: &str) -> String {
        if self.use_color {
            format!("{} Error with {}: {}", "✗".red().bold(), path.display(), reason)
        } else {
            format!("✗ Error with {}: {}", path.display(), reason)
        }
    }

    /// Summary printed at the end of every run, preceded by a blank line
    pub fn format_summary(&self, updated: usize, swap: &ColorSwap, dry_run: bool) -> String {
        let count_line = if dry_run {
            format!("{} file(s) would be updated (dry run, nothing written)", updated)
        } else {
            format!("{} file(s) updated successfully!", updated)
        };
        let count_line = if self.use_color {
            count_line.bold().to_string()
        } else {
            count_line
        };

        format!(
            "\n{}\nColor replaced: {} → {}",
            count_line,
            swap.old_value(),
            swap.new_value()
        )
    }

    /// Line diff of a file that would change, with `context_lines` of context around each hunk
    pub fn format_preview(&self, path: &Path, original: &str, modified: &str) -> String {
        let mut output = String::new();

        let header = path.display().to_string();
        if self.use_color {
            output.push_str(&format!("{}\n", header.bold().cyan()));
        } else {
            output.push_str(&format!("{}\n", header));
        }

        let diff = TextDiff::from_lines(original, modified);
        for (idx, group) in diff.grouped_ops(self.context_lines).iter().enumerate() {
            if idx > 0 {
                if self.use_color {
                    output.push_str(&format!("{}\n", "...".dimmed()));
                } else {
                    output.push_str("...\n");
                }
            }

            for op in group {
                for change in diff.iter_changes(op) {
                    let line_num = change
                        .old_index()
                        .or(change.new_index())
                        .map(|i| i + 1)
                        .unwrap_or_default();
                    let content = change.value().trim_end_matches(['\n', '\r']);
                    let indicator = match change.tag() {
                        ChangeTag::Equal => "=",
                        ChangeTag::Delete => "-",
                        ChangeTag::Insert => "+",
                    };

                    let line = if self.use_color {
                        match change.tag() {
                            ChangeTag::Equal => format!("L{}: {} {}\n", line_num, indicator.dimmed(), content.dimmed()),
                            ChangeTag::Delete => format!("L{}: {} {}\n", line_num, indicator.red().bold(), content.red()),
                            ChangeTag::Insert => format!("L{}: {} {}\n", line_num, indicator.green().bold(), content.green()),
                        }
                    } else {
                        format!("L{}: {} {}\n", line_num, indicator, content)
                    };
                    output.push_str(&line);
                }
            }
        }

        output
    }
}
