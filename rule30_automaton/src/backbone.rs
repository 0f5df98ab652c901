// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::history::History;

/// One sample of the backbone column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackboneSample {
    /// Generation the sample was read from.
    pub generation: usize,
    /// State of the center cell in that generation.
    pub bit: u8,
}

/// Iterator over the center cell of every stored generation.
///
/// Created by [`History::backbone`].
#[derive(Clone, Debug)]
pub struct Backbone<'a> {
    history: &'a History,
    next: usize,
}

impl<'a> Backbone<'a> {
    pub(crate) fn new(history: &'a History) -> Self {
        Self { history, next: 0 }
    }
}

impl Iterator for Backbone<'_> {
    type Item = BackboneSample;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.history.row(self.next)?;
        let sample = BackboneSample {
            generation: self.next,
            bit: row.get(self.history.center()).unwrap_or(0),
        };
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Backbone<'_> {}

/// Collects the backbone column of `history` in generation order.
#[must_use]
pub fn extract_backbone(history: &History) -> Vec<BackboneSample> {
    history.backbone().collect()
}
