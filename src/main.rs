use antworld_core::{init_logging, AppConfig};
use antworld_lib::app::App;
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; defaults are used if it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of dispersal ticks to run
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Seed for food placement, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Drive the world with a synthetic colony instead of leaving it idle
    #[arg(long)]
    deposit: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let mut app = App::new(config)?;
    if args.deposit {
        app = app.with_synthetic_colony();
    }
    let summary = app.run(args.ticks);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
