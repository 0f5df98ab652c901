// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};
use rule30_explorer::DisplaySurface;
use vello::Scene;
use vello::peniko::{Color, Fill};

/// Records explorer drawing into a Vello [`Scene`].
///
/// The explorer works in logical pixels; `transform` scales to device pixels.
pub(crate) struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
    screen: Size,
}

impl<'a> SceneSurface<'a> {
    pub(crate) fn new(scene: &'a mut Scene, scale_factor: f64, screen: Size) -> Self {
        Self {
            scene,
            transform: Affine::scale(scale_factor),
            screen,
        }
    }
}

impl core::fmt::Debug for SceneSurface<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneSurface")
            .field("transform", &self.transform)
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

impl DisplaySurface for SceneSurface<'_> {
    fn clear(&mut self, color: Color) {
        self.scene.fill(
            Fill::NonZero,
            self.transform,
            color,
            None,
            &self.screen.to_rect(),
        );
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.scene
            .fill(Fill::NonZero, self.transform, color, None, &rect);
    }
}
