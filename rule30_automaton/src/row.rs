// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

/// One generation of the automaton: a fixed-width ring of binary cells.
///
/// Cells are stored as `0`/`1` bytes. A row is immutable once built; the
/// history only ever appends new rows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    cells: Box<[u8]>,
}

impl Row {
    /// Creates a row of `width` inactive cells with a single active cell at `active`.
    ///
    /// `active` must be less than `width`.
    pub(crate) fn single(width: usize, active: usize) -> Self {
        debug_assert!(active < width, "active cell {active} outside width {width}");
        let mut cells = alloc::vec![0_u8; width].into_boxed_slice();
        cells[active] = 1;
        Self { cells }
    }

    /// Builds a row from cell states; any non-zero state is stored as `1`.
    pub fn from_states(states: impl IntoIterator<Item = u8>) -> Self {
        Self {
            cells: states.into_iter().map(|s| u8::from(s != 0)).collect(),
        }
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Returns the raw cell states.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the state of cell `index`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.cells.get(index).copied()
    }

    /// Returns `true` if cell `index` exists and is active.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.get(index) == Some(1)
    }

    /// Iterates over the indices of active cells in increasing order.
    pub fn active_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (c != 0).then_some(i))
    }

    /// Number of active cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }
}
