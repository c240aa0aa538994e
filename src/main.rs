//! flat-auth - Entry Point
//!
//! Signup, login and existence checks against a flat credential file.

use clap::Parser;
use log::{debug, error};
use std::process::ExitCode;

mod cli;

use cli::{Cli, EXIT_CONFIG, execute, exit_status};
use flat_auth::{AuthConfig, SharedAuthService};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let cli = Cli::parse();

    let config = match cli.resolve_config(AuthConfig::load()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    debug!("Using credential file {}", config.user_data_file);

    let auth = SharedAuthService::from_config(&config);
    let (ok, output) = execute(cli.command, &auth).await;
    println!("{output}");

    ExitCode::from(exit_status(ok))
}
