// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

/// A status line that disappears after a fixed time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransientMessage {
    text: String,
    expires_at: Instant,
}

impl TransientMessage {
    /// Shows `text` from `now` for `duration`.
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: now + duration,
        }
    }

    /// Message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` until the display time has elapsed.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}
