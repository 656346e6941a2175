use thiserror::Error;

use crate::errors::domain::DomainError;

/// Top-level error for the binaries: domain failures plus configuration and I/O.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable short code for log fields and exit diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::Validation(..)) => "DOMAIN_VALIDATION",
            AppError::Domain(DomainError::Precondition(..)) => "DOMAIN_PRECONDITION",
            AppError::Domain(DomainError::Strategy(..)) => "DOMAIN_STRATEGY",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}
