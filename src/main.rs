mod aliases;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod helpers;
mod interactive;
mod logging;
mod output;
mod parameters;
#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use client::JenkinsClient;
use config::{Config, ConfigStore};
use interactive::InquirePrompter;
use std::process;
use tracing::debug;

fn main() {
    logging::init_logging("warn");

    if let Err(e) = run() {
        output::error(&format!("{:#}", e));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let prompter = InquirePrompter;

    match cli.command {
        Commands::Deploy { alias } => {
            let (_, config) = load_config(&prompter)?;
            let client = JenkinsClient::new(config.profile.clone())?;
            let deployment = commands::deploy::execute(&config, &client, &prompter, &alias)?;
            debug!("Deploy finished: {}", deployment);
        }
        Commands::List => {
            let (_, config) = load_config(&prompter)?;
            commands::alias::execute_list(&config)?;
        }
        Commands::Add { alias, path } => {
            let (store, mut config) = load_config(&prompter)?;
            let client = JenkinsClient::new(config.profile.clone())?;
            commands::alias::execute_add(&store, &mut config, &client, &prompter, &alias, &path)?;
        }
        Commands::Remove { alias } => {
            let (store, mut config) = load_config(&prompter)?;
            commands::alias::execute_remove(&store, &mut config, &alias)?;
        }
        Commands::Status { alias, build } => {
            let (_, config) = load_config(&prompter)?;
            let client = JenkinsClient::new(config.profile.clone())?;
            commands::status::execute(&config, &client, &alias, build.as_deref())?;
        }
        Commands::Completion { shell } => {
            commands::completion::execute(shell)?;
        }
    }

    Ok(())
}

fn load_config(prompter: &InquirePrompter) -> Result<(ConfigStore, Config)> {
    let store = ConfigStore::locate()?;
    debug!("Using config file {}", store.path().display());
    let config = store.load(prompter)?;
    Ok((store, config))
}
