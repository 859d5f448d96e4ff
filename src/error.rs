//! Errors raised outside the extraction core.
//!
//! The pipeline itself never fails; these cover fetching, input checks and
//! configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Invalid Google Docs URL: {0} (expected a published document URL containing /pub)")]
    InvalidUrl(String),

    #[error("Fill character must be exactly one character, got {0:?}")]
    InvalidFill(String),

    #[error("Timeout must be a positive number of seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No ASCII art data found in the document.")]
    NoArtFound,

    #[error("ASCII art grid is too large to display ({width}x{height} positions, limit {limit})")]
    GridTooLarge { width: u128, height: u128, limit: u128 },
}

pub type Result<T> = std::result::Result<T, GlyphError>;

/// Parse a `--fill` argument into the single character the grid needs.
pub fn parse_fill(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GlyphError::InvalidFill(value.to_string())),
    }
}
