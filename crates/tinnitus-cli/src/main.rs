use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use tinnitus_core::Config;

mod commands;
mod host;

#[derive(Parser)]
#[command(name = "tinnitus-cli", version, about = "Tinnitus Relief CLI")]
struct Cli {
    /// Configuration file (default: $TINNITUS_CONFIG or ~/.config/tinnitus-relief/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Do not print feedback cues
    #[arg(long, global = true)]
    no_haptics: bool,
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List activities by tab
    Activities,
    /// Daily tinnitus tips
    Tips,
    /// About and emergency help
    About,
    /// Run a guided routine
    Session(commands::session::SessionArgs),
    /// Breathing focus
    Breathe(commands::games::BreatheArgs),
    /// Tap pattern memory game (taps read from stdin)
    Pattern(commands::games::GameArgs),
    /// Color puzzle (choices read from stdin)
    Color(commands::games::GameArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    host::init_logging(cli.verbose);

    let result = load_config(cli.config.as_deref()).and_then(|mut config| {
        if cli.no_haptics {
            config.settings.haptics = false;
        }
        match cli.command {
            Commands::Activities => commands::content::activities(&config),
            Commands::Tips => commands::content::tips(),
            Commands::About => commands::content::about(),
            Commands::Session(args) => commands::session::run(args, &config),
            Commands::Breathe(args) => commands::games::breathe(args, &config),
            Commands::Pattern(args) => commands::games::pattern(args, &config),
            Commands::Color(args) => commands::games::color(args, &config),
            Commands::Config { action } => commands::config::run(action, &config),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
