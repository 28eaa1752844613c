//! # CLI Layer
//!
//! One possible UI client for the articles library: an interactive menu on stdin/stdout.
//!
//! This is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses command-line arguments
//! - Formats articles for human consumption
//!
//! ## Structure
//!
//! - `run()`: builds the session from the arguments and drives the menu
//! - `setup`: argument parsing, logging and color setup
//! - `menu`: the menu state machine
//! - `print`: table and message formatting

mod menu;
mod print;
mod setup;

use articles::api::ArticlesApi;
use articles::config::AppConfig;
use articles::error::Result;
use articles::store::memory::InMemoryStore;
use clap::Parser;
use menu::Menu;
use setup::{init_logging, init_styles, Cli};
use tracing::info;

pub fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help, version and usage errors all end here without a distinct exit code.
            e.print()?;
            return Ok(());
        }
    };
    let config = AppConfig::from(&cli);
    init_logging(&config);
    init_styles(&config);

    let mut api = ArticlesApi::new(InMemoryStore::new());
    if config.seed_demo_data {
        api.seed_demo_data()?;
    }
    info!(seed_demo_data = config.seed_demo_data, "session started");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(api, stdin.lock(), stdout.lock());
    menu.run()?;

    info!(articles = menu.api().articles().count(), "session ended");
    Ok(())
}
