// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the explorer.

use std::io;
use std::path::PathBuf;

use rule30_automaton::ConfigError;

/// Errors surfaced by the explorer.
///
/// Configuration errors are fatal at startup. [`ExplorerError::Io`] is the
/// only error produced while running; it is reported to the user and the
/// simulation keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// The automaton cannot be created with the requested grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// A setting is out of range or inconsistent with another.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::ExplorerConfig`].
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Writing an export failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
