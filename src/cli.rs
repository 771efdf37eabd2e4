use clap::Parser;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser, Debug)]
#[command(name = "recolor")]
#[command(about = "Swap the legacy brand color #3399ff for #006EF7 across components/")]
#[command(long_about = "recolor walks the components/ directory of the current project and
rewrites every .tsx file that contains the legacy brand color.

Both spellings #3399ff and #3399FF become #006EF7. Files without the old
color are never written. Files that cannot be read or written are reported
and skipped; the sweep always runs to the end.

There is no backup or rollback: commit your work before running it.

CONFIGURATION (~/.recolor/config.toml, optional):
  [logging]
    debug = false                 # Write ~/.recolor/recolor.log
  [output]
    color = true                  # Colored console output
    context_lines = 3             # Preview context (max 10)

EXAMPLES:
  recolor                         Rewrite every matching file
  recolor --dry-run               Show what would change
  recolor --dry-run -n 0          Show only the changed lines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
pub struct Cli {
    /// Preview changes without modifying files
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Number of context lines in --dry-run previews (default from config)
    #[arg(short = 'n', long, value_name = "NUM", value_parser = clap::value_parser!(u8).range(0..=10))]
    pub context: Option<u8>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["recolor"]).unwrap();
        assert!(!cli.dry_run);
        assert_eq!(cli.context, None);
    }

    #[test]
    fn test_dry_run_with_context() {
        let cli = Cli::try_parse_from(["recolor", "--dry-run", "-n", "0"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.context, Some(0));
    }

    #[test]
    fn test_context_out_of_range() {
        assert!(Cli::try_parse_from(["recolor", "-n", "11"]).is_err());
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["recolor", "src"]).is_err());
    }
}
