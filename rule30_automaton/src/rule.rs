// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::row::Row;

/// Elementary (radius 1, two state) cellular automaton rule.
///
/// The rule number follows Wolfram's convention: the three-cell neighborhood
/// `(left, center, right)` is read as the binary number
/// `p = left * 4 + center * 2 + right`, and the next state is bit `p` of the
/// rule number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryRule(u8);

impl ElementaryRule {
    /// Rule 30: the next state is `1` iff `p ∈ {1, 2, 3, 4}`.
    pub const RULE_30: Self = Self(30);

    /// Creates a rule from its Wolfram number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the Wolfram number of this rule.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Computes the next state of a cell from its neighborhood.
    ///
    /// Any non-zero input is treated as an active cell.
    #[inline]
    #[must_use]
    pub const fn apply(self, left: u8, center: u8, right: u8) -> u8 {
        let pattern = neighborhood(left, center, right);
        (self.0 >> pattern) & 1
    }
}

impl Default for ElementaryRule {
    fn default() -> Self {
        Self::RULE_30
    }
}

/// Encodes a neighborhood as `left * 4 + center * 2 + right`.
#[inline]
const fn neighborhood(left: u8, center: u8, right: u8) -> u8 {
    ((left != 0) as u8) << 2 | ((center != 0) as u8) << 1 | (right != 0) as u8
}

/// The fixed Rule 30 transition for a single cell.
#[inline]
#[must_use]
pub const fn rule30(left: u8, center: u8, right: u8) -> u8 {
    matches!(neighborhood(left, center, right), 1..=4) as u8
}

/// Computes the row that follows `row` under `rule`.
///
/// Neighbors wrap around: index `-1` reads the last cell and index `width`
/// reads the first, so the row behaves as a ring. This is a pure function of
/// the previous row.
#[must_use]
pub fn transition(row: &Row, rule: ElementaryRule) -> Row {
    let cells = row.cells();
    let width = cells.len();
    let next = (0..width).map(|i| {
        let left = cells[(i + width - 1) % width];
        let right = cells[(i + 1) % width];
        rule.apply(left, cells[i], right)
    });
    Row::from_states(next)
}
