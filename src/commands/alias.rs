use anyhow::Result;
use tracing::info;

use crate::client::{JenkinsClient, Transport};
use crate::config::{Config, ConfigStore};
use crate::error::Error;
use crate::helpers::url::{full_url, normalize_job_path};
use crate::interactive::Prompter;
use crate::output;

pub fn execute_add<T: Transport>(
    store: &ConfigStore,
    config: &mut Config,
    client: &JenkinsClient<T>,
    prompter: &dyn Prompter,
    alias: &str,
    job_path: &str,
) -> Result<()> {
    if config.jobs.contains(alias) {
        return Err(Error::AliasExists(alias.to_string()).into());
    }

    let path = normalize_job_path(job_path, &config.profile.server_url);
    if path.is_empty() {
        return Err(Error::InvalidJobUrl(job_path.to_string()).into());
    }

    let url = full_url(&config.profile.server_url, &path);
    let display_name = output::with_spinner(&format!("Checking {}...", url), || client.validate_job_url(&path))?;

    if !prompter.confirm(&format!("Do you want to add '{}' as {}?", display_name, alias))? {
        output::info("Operation cancelled.");
        return Ok(());
    }

    config.jobs.insert(alias.to_string(), path.clone())?;
    store.save(config)?;

    info!("Added alias {} -> {}", alias, path);
    output::success(&format!("{} successfully added as {}", display_name, alias));

    Ok(())
}

pub fn execute_list(config: &Config) -> Result<()> {
    if config.jobs.is_empty() {
        output::info("No aliases configured.");
        output::tip("Use 'zli add <alias> <job-sub-path>' to add one.");
        return Ok(());
    }

    output::header("Configured aliases");

    for entry in config.jobs.list() {
        output::alias_row(&entry.alias, &full_url(&config.profile.server_url, &entry.path));
    }

    Ok(())
}

pub fn execute_remove(store: &ConfigStore, config: &mut Config, alias: &str) -> Result<()> {
    let removed = config.jobs.delete(alias)?;
    store.save(config)?;

    info!("Removed alias {} -> {}", removed.alias, removed.path);
    output::success(&format!("{} has been removed", removed.alias));

    Ok(())
}
