use anyhow::{Context, Result};
use clap::Parser;
use md2org_config::Config;
use md2org_engine::{DEFAULT_PATH, convert_file};
use std::process;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from_path(&config_path)?.unwrap_or_default();
    log::debug!("Config path: {}", config_path.display());

    let daily_path = config
        .resolve_daily_path(cli.daily_path.as_deref())
        .unwrap_or_else(|| DEFAULT_PATH.to_string());
    let asset_path = config
        .resolve_asset_path(cli.asset_path.as_deref())
        .unwrap_or_else(|| DEFAULT_PATH.to_string());
    log::info!("Daily path: {daily_path}, asset path: {asset_path}");

    if cli.save_config {
        let updated = Config {
            daily_path: Some(daily_path.clone()),
            asset_path: Some(asset_path.clone()),
        };
        updated
            .save_to_path(&config_path)
            .with_context(|| format!("Failed to save config to {}", config_path.display()))?;
        log::info!("Config saved to {}", config_path.display());
    }

    let output = convert_file(&cli.infile, &daily_path, &asset_path)
        .with_context(|| format!("Failed to convert {}", cli.infile.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
