use recolor::{cli, config, logger, ColorSwap, FileProcessor, Reporter, Scanner, Sweep};

fn main() {
    let args = cli::parse_args();

    // Setup problems never stop the sweep
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}. Using default settings.", e);
            config::Config::default()
        }
    };

    if let Err(e) = logger::init_debug_logging(config.logging.debug) {
        eprintln!("Warning: {:#}", e);
    }

    let context = args
        .context
        .map(usize::from)
        .unwrap_or(config.output.context_lines);

    let sweep = Sweep::new(
        Scanner::default(),
        FileProcessor::new(ColorSwap::default()),
        Reporter::new(Reporter::should_use_color(config.output.color), context),
        args.dry_run,
    );

    sweep.run();
}
