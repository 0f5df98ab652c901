// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Invalid automaton configuration, detected when the history is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The grid has no cells.
    #[error("grid width must be at least 1")]
    ZeroWidth,
    /// The grid width is even, so it has no single center cell.
    #[error("grid width {width} is even; the seed cell needs a unique center")]
    EvenWidth {
        /// The rejected width.
        width: usize,
    },
}
