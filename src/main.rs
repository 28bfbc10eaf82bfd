use clap::Parser;
use pokedex::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pokedex", about = "Terminal Pokédex backed by PokéAPI")]
struct Args {
    /// Pokémon ID to show first
    #[arg(short, long)]
    id: Option<u32>,

    /// PokéAPI base URL (e.g. a local mirror)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to pokedex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pokedex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("{e}; falling back to defaults");
        log::warn!("{e}; falling back to defaults");
        config::PokedexConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_id: args.id,
            base_url: args.base_url,
        },
    );

    log::info!(
        "Pokédex starting up: base_url={}, start_id={}",
        resolved.base_url,
        resolved.start_id
    );

    pokedex::tui::run(resolved)
}
