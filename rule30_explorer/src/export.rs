// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backbone export: report formatting and where it gets written.
//!
//! A report is a few `#` comment lines followed by one `generation value`
//! pair per line:
//!
//! ```text
//! # Rule 30 backbone
//! # center column: 256
//! # generations: 3
//! # generation value
//! 0 1
//! 1 1
//! 2 0
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use rule30_automaton::History;

/// Destination for exported reports.
pub trait PersistenceSink {
    /// Writes `lines` to `path`, returning the path actually written.
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> io::Result<PathBuf>;
}

/// Writes reports to the local file system, creating parent directories.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSink;

impl PersistenceSink for FileSink {
    fn write_lines(&mut self, path: &Path, lines: &[String]) -> io::Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(fs::File::create(path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "wrote export");
        Ok(path.to_path_buf())
    }
}

/// Formats the backbone of every stored generation.
#[must_use]
pub fn backbone_report(history: &History) -> Vec<String> {
    let mut lines = Vec::with_capacity(history.len() + 4);
    lines.push(format!("# Rule {} backbone", history.rule().number()));
    lines.push(format!("# center column: {}", history.center()));
    lines.push(format!("# generations: {}", history.len()));
    lines.push("# generation value".to_owned());
    lines.extend(
        history
            .backbone()
            .map(|sample| format!("{} {}", sample.generation, sample.bit)),
    );
    lines
}

/// File name for an export taken at `at`: `backbone_YYYYmmdd_HHMMSS.txt`.
#[must_use]
pub fn export_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: core::fmt::Display,
{
    format!("backbone_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// Full export path inside `dir`.
#[must_use]
pub fn export_path<Tz: TimeZone>(dir: &Path, at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: core::fmt::Display,
{
    dir.join(export_file_name(at))
}
