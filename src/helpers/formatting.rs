use console::style;

/// Uppercase the first letter of a JSON field name, e.g. `building` -> `Building`
pub fn title_case(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format Jenkins build result with console styling; a running build has none yet
pub fn format_build_result(result: Option<&str>) -> String {
    match result {
        Some("SUCCESS") => style("SUCCESS").green().to_string(),
        Some("FAILURE") => style("FAILURE").red().to_string(),
        Some("UNSTABLE") => style("UNSTABLE").yellow().to_string(),
        Some("ABORTED") => style("ABORTED").dim().to_string(),
        Some(r) => r.to_string(),
        None => style("IN_PROGRESS").cyan().to_string(),
    }
}

/// Format the `building` flag with console styling
pub fn format_building(building: bool) -> String {
    if building {
        style("true").cyan().to_string()
    } else {
        "false".to_string()
    }
}
