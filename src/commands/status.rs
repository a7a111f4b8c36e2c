use anyhow::Result;

use crate::client::{BuildStatus, JenkinsClient, Transport};
use crate::config::Config;
use crate::helpers::formatting::{format_build_result, format_building, title_case};
use crate::output;

pub fn execute<T: Transport>(
    config: &Config,
    client: &JenkinsClient<T>,
    alias: &str,
    build_number: Option<&str>,
) -> Result<()> {
    let job = config.jobs.resolve(alias)?;

    let status = output::with_spinner(&format!("Fetching build status for '{}'...", alias), || {
        client.fetch_status(job, build_number)
    })?;

    output::plain(&format!("Status for \"{}\"", status.full_display_name));
    for (field, value) in status_fields(&status) {
        output::field(&field, &value);
    }

    Ok(())
}

/// Returned fields other than `_class` and `fullDisplayName`
fn status_fields(status: &BuildStatus) -> Vec<(String, String)> {
    let mut fields = Vec::new();

    if let Some(id) = &status.id {
        fields.push((title_case("id"), id.clone()));
    }
    if let Some(building) = status.building {
        fields.push((title_case("building"), format_building(building)));
        fields.push((title_case("result"), format_build_result(status.result.as_deref())));
    } else if let Some(result) = &status.result {
        fields.push((title_case("result"), format_build_result(Some(result))));
    }
    if let Some(url) = &status.url {
        fields.push((title_case("url"), url.clone()));
    }

    fields
}
