/// Query used when discovering a job's declared build parameters
const PARAMETER_TREE: &str = "api/json?tree=property[parameterDefinitions[name,description,type,choices]]";

/// Fields requested when reading a single build
const STATUS_TREE: &str = "api/json?tree=fullDisplayName,id,building,result,url";

/// Ensure the server URL ends with exactly one `/`
pub fn normalize_server_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}

/// Reduce a pasted job location to a sub-path relative to the server.
///
/// A leading copy of `server_url` is stripped (trailing separators are
/// ignored on both sides), then surrounding separators are removed and the
/// result ends with a single `/`. Returns an empty string when nothing is
/// left, i.e. the input names no job at all.
pub fn normalize_job_path(input: &str, server_url: &str) -> String {
    let input = input.trim();
    let server = server_url.trim().trim_end_matches('/');

    let relative = match input.strip_prefix(server) {
        Some(rest) if !server.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => input,
    };

    let trimmed = relative.trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{}/", trimmed)
}

/// Join the server base URL and a relative endpoint
pub fn full_url(server_url: &str, endpoint: &str) -> String {
    format!("{}{}", server_url, endpoint)
}

/// Endpoint returning the job description, used to validate a path
pub fn job_api_endpoint(job_path: &str) -> String {
    format!("{}api/json", job_path)
}

/// Endpoint listing the job's parameter definitions
pub fn job_parameters_endpoint(job_path: &str) -> String {
    format!("{}{}", job_path, PARAMETER_TREE)
}

/// Endpoint accepting a parameterized build trigger
pub fn build_with_parameters_endpoint(job_path: &str) -> String {
    format!("{}buildWithParameters", job_path)
}

/// Endpoint describing one build; `build` is a number or `lastBuild`
pub fn build_status_endpoint(job_path: &str, build: &str) -> String {
    format!("{}{}/{}", job_path, build, STATUS_TREE)
}
