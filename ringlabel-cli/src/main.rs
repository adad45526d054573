use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use ringlabel::util::LabelConfig;
use ringlabel_cli::io;
use ringlabel_cli::io::cli::Cli;
use ringlabel_cli::process_fixture_set;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LabelConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed LabelConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).context(format!(
            "could not create output folder: {}",
            args.output_folder.display()
        ))?;
    }

    let fixture_set = io::read_fixture_set(&args.input_file)?;
    process_fixture_set(
        fixture_set,
        config,
        input_file_stem,
        &args.output_folder,
        args.svg,
    )?;

    Ok(())
}
