use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print a success message with a green checkmark
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Warnings go to stderr so they never mix with listed data
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// One `- alias url` row of the alias listing
pub fn alias_row(alias: &str, url: &str) {
    println!("- {} {}", style(alias).cyan().bold(), url);
}

/// One `Field: value` line of a build status
pub fn field(name: &str, value: &str) {
    println!("{}: {}", style(name).dim(), value);
}

pub fn tip(msg: &str) {
    println!("\n{} {}", style("💡").bold(), style(msg).italic());
}

pub fn plain(msg: &str) {
    println!("{}", msg);
}

/// Run `work` behind a spinner, clearing it before returning
pub fn with_spinner<R>(msg: &str, work: impl FnOnce() -> R) -> R {
    let pb = ProgressBar::new_spinner();
    let template = ProgressStyle::default_spinner()
        .template("{spinner:.blue} {msg} {elapsed_precise:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(template);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = work();
    pb.finish_and_clear();
    result
}
