// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the FIM dashboard.

use thiserror::Error;

/// Top-level error type for all dashboard operations.
#[derive(Debug, Error)]
pub enum FimError {
    // -- Backend errors --
    /// The request never produced an HTTP response (DNS, refused, reset...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status. `message` is the backend's
    /// own human-readable message and is shown to the operator verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    // -- Local errors --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FimError {
    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FimError>;
