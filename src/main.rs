use std::fs::File;
use std::path::PathBuf;

use charex::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "charex", about = "Browse characters with infinite scroll")]
struct Args {
    /// Character endpoint (pages are requested as `?page=N`)
    #[arg(long)]
    base_url: Option<String>,

    /// First page to load
    #[arg(long)]
    start_page: Option<u32>,

    /// Never request pages past this one
    #[arg(long)]
    max_page: Option<u32>,

    /// Quiet time after scrolling before checking for the end, in ms
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Load more when this many rows from the end
    #[arg(long)]
    threshold: Option<u16>,

    /// Config file to use instead of ~/.charex/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to charex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("charex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Character Explorer starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            config::ExplorerConfig::default()
        }
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        start_page: args.start_page,
        max_page: args.max_page,
        debounce_ms: args.debounce_ms,
        threshold_rows: args.threshold,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    charex::tui::run(resolved)
}
