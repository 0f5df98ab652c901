// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How far past the viewport the history is kept computed.
///
/// Manual navigation and auto-scroll use separate margins. The margin is
/// also the batch size, so a catch-up after a large jump appends whole
/// batches until the target is covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookahead {
    catch_up_batch: usize,
    auto_scroll_batch: usize,
}

/// A request to grow the history through `target` in steps of `batch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtensionPlan {
    /// Generation that must exist afterwards.
    pub target: usize,
    /// Rows appended per step.
    pub batch: usize,
}

impl Lookahead {
    /// Creates a policy. Zero batches are raised to `1`.
    #[must_use]
    pub fn new(catch_up_batch: usize, auto_scroll_batch: usize) -> Self {
        Self {
            catch_up_batch: catch_up_batch.max(1),
            auto_scroll_batch: auto_scroll_batch.max(1),
        }
    }

    /// Margin and batch for the current mode.
    #[must_use]
    pub fn batch(&self, auto_scrolling: bool) -> usize {
        if auto_scrolling {
            self.auto_scroll_batch
        } else {
            self.catch_up_batch
        }
    }

    /// Decides whether a history of `len` rows must grow to serve a view
    /// reaching generation `ceiling`.
    #[must_use]
    pub fn plan(&self, ceiling: usize, len: usize, auto_scrolling: bool) -> Option<ExtensionPlan> {
        let batch = self.batch(auto_scrolling);
        let target = ceiling.saturating_add(batch);
        (target >= len).then_some(ExtensionPlan { target, batch })
    }
}
