use clap::Parser;
use std::path::PathBuf;
use strategist_cli::cli::dispatcher::Dispatcher;
use strategist_cli::cli::main_types::Cli;
use strategist_cli::storage::config::Config;
use strategist_cli::storage::credentials::ApiCredential;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    // Resolve the credential once; it is immutable for the process
    // lifetime. --api-key (or STRATEGIST_API_KEY via clap) wins over the
    // fallback environment sources.
    let credential = cli
        .api_key
        .as_deref()
        .and_then(ApiCredential::from_flag)
        .or_else(ApiCredential::resolve);

    if cli.verbose {
        println!("Verbose mode is enabled");
        println!("Using model: {}", config.model);

        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }
    }

    let dispatcher = Dispatcher::new(config, credential, cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
