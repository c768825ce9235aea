use std::path::PathBuf;

/// Errors related to configuration loading and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Errors raised while fetching a page or document over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("Invalid header `{name}`: {message}")]
    InvalidHeader { name: String, message: String },
}

/// Errors raised while retrieving the remote credential document.
///
/// These never reach the caller of a search: the provider substitutes the
/// fallback cookie and reports the error as a diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Credential document unreachable: {0}")]
    Transport(#[from] TransportError),

    #[error("Credential document is not valid JSON: {0}")]
    Malformed(String),

    #[error("\"cookie\" property not found in the credential document")]
    MissingCookie,

    #[error("Credential timestamp `{0}` is not a valid date")]
    InvalidTimestamp(String),
}
