//! Error types for the FPL stats CLI

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Chart rendering failed: {message}")]
    Chart { message: String },

    #[error("Dataset contains no rows")]
    NoData,

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },
}

impl<E> From<DrawingAreaErrorKind<E>> for FplError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        FplError::Chart {
            message: err.to_string(),
        }
    }
}
