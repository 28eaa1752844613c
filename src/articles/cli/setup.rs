use articles::config::AppConfig;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "articles", bin_name = "articles", version)]
#[command(about = "Interactive, menu-driven article manager", long_about = None)]
pub struct Cli {
    /// Start with an empty store instead of the three demo articles
    #[arg(long)]
    pub no_demo_data: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        AppConfig::default()
            .with_seed_demo_data(!cli.no_demo_data)
            .with_color(!cli.no_color)
            .with_verbose(cli.verbose)
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the config's default filter.
pub(super) fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Colors only make sense on a terminal.
pub(super) fn init_styles(config: &AppConfig) {
    if !config.color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}
