use reqwest::StatusCode;
use thiserror::Error;

/// Failures the command handlers report to the operator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}: alias cannot be found")]
    AliasNotFound(String),

    #[error("Alias '{0}' is already in use")]
    AliasExists(String),

    #[error("'{0}' does not point at a Jenkins job. Please double check your URL pattern.")]
    InvalidJobUrl(String),

    #[error("Request to {url} failed: HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Error when decoding {what}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("No value selected for '{0}'")]
    ChoiceCancelled(String),
}

pub type Result<T> = std::result::Result<T, Error>;
