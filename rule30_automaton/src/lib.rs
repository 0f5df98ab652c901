// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule 30 Automaton: an append-only history of elementary cellular automaton rows.
//!
//! This crate is the simulation engine behind the explorer. It provides:
//! - [`Row`]: a fixed-width ring of binary cells.
//! - [`ElementaryRule`] and [`transition`]: the local update rule, with Rule 30
//!   as the default.
//! - [`History`]: a growable, never-truncated log of rows, indexed by generation,
//!   that is extended lazily via [`History::extend`] and [`History::ensure_through`].
//! - [`extract_backbone`]: the time series of the seed column.
//!
//! ## Minimal example
//!
//! ```rust
//! use rule30_automaton::History;
//!
//! let mut history = History::initialize(7).unwrap();
//! history.extend(2);
//!
//! assert_eq!(history.row(1).unwrap().cells(), &[0, 0, 1, 1, 1, 0, 0]);
//! assert_eq!(history.row(2).unwrap().cells(), &[0, 1, 1, 0, 0, 1, 0]);
//!
//! // Make sure generation 100 exists, generating 16 rows at a time.
//! history.ensure_through(100, 16);
//! assert!(history.len() > 100);
//! ```
//!
//! Generation is single threaded and deterministic: the same width and rule
//! always produce the same rows.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod backbone;
mod error;
mod history;
mod row;
mod rule;

pub use backbone::{Backbone, BackboneSample, extract_backbone};
pub use error::ConfigError;
pub use history::History;
pub use row::Row;
pub use rule::{ElementaryRule, rule30, transition};
