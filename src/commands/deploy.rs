use anyhow::{Context, Result};
use std::fmt;
use tracing::info;

use crate::client::{JenkinsClient, Transport};
use crate::config::Config;
use crate::interactive::{self, Prompter};
use crate::output;

/// How a deploy ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Triggered { alias: String },
    Abandoned,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Triggered { alias } => write!(f, "{} deployed successfully", alias),
            Deployment::Abandoned => write!(f, "Deploy abandoned."),
        }
    }
}

pub fn execute<T: Transport>(
    config: &Config,
    client: &JenkinsClient<T>,
    prompter: &dyn Prompter,
    alias: &str,
) -> Result<Deployment> {
    let job = config.jobs.resolve(alias)?;

    let parameters = output::with_spinner(&format!("Fetching parameters for '{}'...", alias), || {
        client.discover_parameters(job)
    })?;
    if parameters.is_empty() {
        output::info(&format!("'{}' declares no build parameters", alias));
    }

    let request = interactive::collect_build_request(prompter, &parameters)?;

    let preview = serde_json::to_string(&request).context("Failed to render build parameters")?;
    output::plain(&format!("This will deploy {} with parameters {}", alias, preview));

    if !prompter.confirm("Confirm?")? {
        let deployment = Deployment::Abandoned;
        output::info(&deployment.to_string());
        return Ok(deployment);
    }

    let outcome = output::with_spinner(&format!("Triggering build for '{}'...", alias), || {
        client.trigger_build(job, &request)
    })?;

    if !outcome.succeeded {
        anyhow::bail!("Deploy of {} failed: {}", alias, outcome.status_text);
    }

    info!("Triggered {} ({})", job.path, outcome.status_text);
    let deployment = Deployment::Triggered { alias: alias.to_string() };
    output::success(&deployment.to_string());
    output::tip(&format!("Use 'zli status {}' to check build status", alias));

    Ok(deployment)
}
