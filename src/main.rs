mod cli;
mod version_fetch;

use std::process::exit;

use crate::cli::Command;
use crate::version_fetch::{FetchConfig, FetchError, FetchService, SystemFetchEnv};

fn main() {
    let command = match cli::parse_args(std::env::args()) {
        Ok(command) => command,
        Err(error) => {
            eprintln!("{}", cli::render_error(&error));
            eprintln!("{}", cli::usage());
            exit(1);
        }
    };
    match command {
        Command::Version => println!("{}", cli::version_line(env!("CARGO_PKG_VERSION"))),
        Command::Help => println!("{}", cli::usage()),
        Command::Run => {
            if let Err(error) = run() {
                eprintln!("{error}");
                exit(1);
            }
        }
    }
}

fn run() -> Result<(), FetchError> {
    let env = SystemFetchEnv;
    let config = FetchConfig::from_env(&env);
    let resolution = FetchService::resolve_latest(&config)?;
    println!("REDPANDA_VERSION={}", resolution.version);
    println!("REDPANDA_DOCKER_REPO={}", resolution.docker_repo);
    Ok(())
}
