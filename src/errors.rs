//! Unified application error type.
//! All modules (api, core, render, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Planning service
    // ---------------------------
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Planning service returned {status}: {body}")]
    Service { status: u16, body: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Unknown duty status: {0}")]
    UnknownStatus(String),

    // ---------------------------
    // Render errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
