use anyhow::Result;
use markdown_caret_config::BackendConfig;
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => emit(None)?,
        2 => emit(Some(PathBuf::from(&args[1])))?,
        3 if args[1] == "--init" => init(PathBuf::from(&args[2]))?,
        _ => {
            eprintln!("Usage: {} [config-file]", args[0]);
            eprintln!("       {} --init <config-file>", args[0]);
            process::exit(1);
        }
    }

    Ok(())
}

/// Prints the build-time define map for the given config file, the default
/// config file, or the process environment.
fn emit(config_path: Option<PathBuf>) -> Result<()> {
    match &config_path {
        Some(path) => log::info!("Loading backend config from {}", path.display()),
        None => log::info!(
            "Loading backend config from {} or the environment",
            BackendConfig::config_path().display()
        ),
    }

    let config = match BackendConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!("{}", config.to_define_json()?);
    Ok(())
}

/// Bootstraps a config file from the current process environment.
fn init(config_path: PathBuf) -> Result<()> {
    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    config.save_to_path(&config_path)?;
    log::info!("Wrote backend config to {}", config_path.display());
    Ok(())
}
