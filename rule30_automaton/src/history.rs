// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::backbone::Backbone;
use crate::error::ConfigError;
use crate::row::Row;
use crate::rule::{ElementaryRule, transition};

/// Append-only log of automaton rows, indexed by generation number.
///
/// Generation `0` holds a single active cell at [`History::center`]; every
/// later generation is the [`transition`] of the one before it. Rows are
/// never rewritten or dropped, so any past generation stays addressable.
#[derive(Clone, Debug)]
pub struct History {
    rows: Vec<Row>,
    width: usize,
    rule: ElementaryRule,
}

impl History {
    /// Creates a Rule 30 history seeded with one active cell at `width / 2`.
    ///
    /// Fails if `width` is zero or even.
    pub fn initialize(width: usize) -> Result<Self, ConfigError> {
        Self::with_rule(width, ElementaryRule::RULE_30)
    }

    /// Creates a history that evolves under `rule` instead of Rule 30.
    pub fn with_rule(width: usize, rule: ElementaryRule) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if width % 2 == 0 {
            return Err(ConfigError::EvenWidth { width });
        }
        let mut rows = Vec::new();
        rows.push(Row::single(width, width / 2));
        Ok(Self { rows, width, rule })
    }

    /// Number of cells per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Index of the seed column (the backbone).
    #[must_use]
    pub fn center(&self) -> usize {
        self.width / 2
    }

    /// Rule used to produce new rows.
    #[must_use]
    pub fn rule(&self) -> ElementaryRule {
        self.rule
    }

    /// Number of generations currently stored. Always at least `1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false`: the seed row exists from construction on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row for `generation`, if it has been generated.
    #[must_use]
    pub fn row(&self, generation: usize) -> Option<&Row> {
        self.rows.get(generation)
    }

    /// Returns all stored rows in generation order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the newest row.
    #[must_use]
    pub fn last(&self) -> &Row {
        // The seed row is pushed in the constructor and rows are never removed.
        &self.rows[self.rows.len() - 1]
    }

    /// Returns `true` if `generation` exists and its cell at `column` is active.
    #[must_use]
    pub fn is_active(&self, generation: usize, column: usize) -> bool {
        self.row(generation).is_some_and(|row| row.is_active(column))
    }

    /// Reserves capacity for at least `additional` more rows.
    pub fn reserve(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }

    /// Appends `count` new generations.
    ///
    /// Each row is computed from the row immediately before it. Existing rows
    /// are not touched.
    pub fn extend(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.rows.reserve(count);
        for _ in 0..count {
            let next = transition(self.last(), self.rule);
            self.rows.push(next);
        }
        tracing::trace!(count, len = self.rows.len(), "extended history");
    }

    /// Makes sure `generation` exists, extending in chunks of `batch_size`.
    ///
    /// Returns the number of rows appended. A `batch_size` of `0` is treated
    /// as `1`. Afterwards `self.len() > generation`.
    pub fn ensure_through(&mut self, generation: usize, batch_size: usize) -> usize {
        let before = self.rows.len();
        if generation < before {
            return 0;
        }
        let batch = batch_size.max(1);
        while generation >= self.rows.len() {
            self.extend(batch);
        }
        let added = self.rows.len() - before;
        tracing::debug!(generation, batch, added, "history caught up");
        added
    }

    /// Iterates over the backbone column: the seed cell across all generations.
    #[must_use]
    pub fn backbone(&self) -> Backbone<'_> {
        Backbone::new(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::History;
    use crate::error::ConfigError;
    use crate::row::Row;

    #[test]
    fn seed_row_has_single_center_cell() {
        let history = History::initialize(9).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.center(), 4);
        let active: Vec<usize> = history.last().active_cells().collect();
        assert_eq!(active, [4]);
    }

    #[test]
    fn rejects_zero_and_even_widths() {
        assert_eq!(History::initialize(0).unwrap_err(), ConfigError::ZeroWidth);
        assert_eq!(
            History::initialize(8).unwrap_err(),
            ConfigError::EvenWidth { width: 8 }
        );
        assert!(History::initialize(1).is_ok());
    }

    #[test]
    fn extend_zero_is_noop() {
        let mut history = History::initialize(5).unwrap();
        history.extend(0);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn ensure_through_batches_past_target() {
        let mut history = History::initialize(11).unwrap();
        let added = history.ensure_through(10, 4);
        // 1 seed row + three batches of 4 rows covers generation 10.
        assert_eq!(added, 12);
        assert_eq!(history.len(), 13);

        // Already covered: nothing to do.
        assert_eq!(history.ensure_through(12, 4), 0);
    }

    #[test]
    fn ensure_through_with_zero_batch_terminates() {
        let mut history = History::initialize(3).unwrap();
        history.ensure_through(5, 0);
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn rows_are_appended_not_rewritten() {
        let mut history = History::initialize(15).unwrap();
        history.extend(6);
        let snapshot: Vec<Row> = history.rows().to_vec();
        history.extend(20);
        assert_eq!(&history.rows()[..snapshot.len()], snapshot.as_slice());
    }

    #[test]
    fn is_active_handles_missing_generations() {
        let history = History::initialize(7).unwrap();
        assert!(history.is_active(0, 3));
        assert!(!history.is_active(1, 3));
    }
}
