//! Skillboard CLI binary entry point.

use clap::Parser;
use skillboard::cli::{self, Cli, Outcome};
use skillboard::config::SkillboardConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = SkillboardConfig::load(cli.config.as_deref()).and_then(|config| {
        let mut stdout = std::io::stdout().lock();
        cli::run(&cli.command, &config, &mut stdout)
    });

    match result {
        Ok(Outcome::Success) => {}
        Ok(Outcome::NotFound) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(if e.is_user_error() { 2 } else { 1 });
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
