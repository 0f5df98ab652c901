// Copyright 2025 the Rule 30 Explorer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On-screen labels.
//!
//! Labels are drawn as glyph outlines when a font can be loaded, and folded
//! into the window title otherwise.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use kurbo::{Affine, BezPath, Point, Size, Vec2};
use rule30_explorer::TextOverlay;
use skrifa::instance::{LocationRef, Size as FontSize};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::OutlinePen;
use skrifa::{FontRef, GlyphId, MetadataProvider};
use vello::Scene;
use vello::peniko::{Color, Fill};

/// Approximate glyph advance used to report label sizes.
const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 14.0;

/// Pixel size of overlay text.
pub(crate) const LABEL_FONT_SIZE: f32 = 14.0;

/// Fonts tried in order when no `--font` is given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Overlay used by the viewer for one session.
#[derive(Debug)]
pub(crate) enum ViewerOverlay {
    /// Labels drawn into the scene.
    Glyphs(GlyphOverlay),
    /// Labels shown in the window title.
    Title(TitleOverlay),
}

impl ViewerOverlay {
    /// Loads `font`, or the first available system font, falling back to the
    /// window title when nothing usable is found.
    pub(crate) fn new(title: &str, font: Option<&Path>) -> Self {
        let loaded = match font {
            Some(path) => GlyphOverlay::load(path, LABEL_FONT_SIZE)
                .inspect_err(|err| tracing::warn!(error = %err, "font unusable"))
                .ok(),
            None => GlyphOverlay::find_system_font(LABEL_FONT_SIZE),
        };
        match loaded {
            Some(glyphs) => {
                tracing::info!(font = %glyphs.source.display(), "drawing labels with glyphs");
                Self::Glyphs(glyphs)
            }
            None => {
                tracing::info!("no font available; labels go to the window title");
                Self::Title(TitleOverlay::new(title))
            }
        }
    }

    /// Drops the labels of the previous frame.
    pub(crate) fn begin_frame(&mut self) {
        match self {
            Self::Glyphs(glyphs) => glyphs.pending.clear(),
            Self::Title(title) => title.begin_frame(),
        }
    }

    /// Draws buffered labels into `scene` and returns a new window title, if any.
    pub(crate) fn finish_frame(&mut self, scene: &mut Scene, transform: Affine) -> Option<String> {
        match self {
            Self::Glyphs(glyphs) => {
                glyphs.draw(scene, transform);
                None
            }
            Self::Title(title) => title.take_changed_title(),
        }
    }
}

impl TextOverlay for ViewerOverlay {
    fn render_label(&mut self, text: &str) -> Size {
        match self {
            Self::Glyphs(glyphs) => glyphs.render_label(text),
            Self::Title(title) => title.render_label(text),
        }
    }

    fn blit_label(&mut self, text: &str, origin: Point, color: Color) {
        match self {
            Self::Glyphs(glyphs) => glyphs.blit_label(text, origin, color),
            Self::Title(title) => title.blit_label(text, origin, color),
        }
    }
}

#[derive(Clone, Debug)]
struct PendingLabel {
    text: String,
    origin: Point,
    color: Color,
}

/// Draws labels as filled glyph outlines read with `skrifa`.
///
/// Layout is a single horizontal run using the font's advance widths; there
/// is no shaping, which is enough for the ASCII status lines.
pub(crate) struct GlyphOverlay {
    data: Vec<u8>,
    source: PathBuf,
    size: f32,
    pending: Vec<PendingLabel>,
}

impl core::fmt::Debug for GlyphOverlay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphOverlay")
            .field("source", &self.source)
            .field("size", &self.size)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl GlyphOverlay {
    /// Validates `data` as a font and keeps it for drawing at `size` pixels.
    pub(crate) fn from_bytes(data: Vec<u8>, source: PathBuf, size: f32) -> anyhow::Result<Self> {
        if let Err(err) = FontRef::new(&data) {
            anyhow::bail!("parse font {}: {err}", source.display());
        }
        Ok(Self {
            data,
            source,
            size,
            pending: Vec::new(),
        })
    }

    pub(crate) fn load(path: &Path, size: f32) -> anyhow::Result<Self> {
        let data = std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
        Self::from_bytes(data, path.to_path_buf(), size)
    }

    pub(crate) fn find_system_font(size: f32) -> Option<Self> {
        SYSTEM_FONTS.iter().map(Path::new).find_map(|path| {
            Self::load(path, size)
                .inspect_err(|err| tracing::debug!(error = %err, "skipping font"))
                .ok()
        })
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::new(&self.data).ok()
    }

    /// Ascent and descent in pixels; descent is positive below the baseline.
    fn line_metrics(&self, font: &FontRef<'_>) -> (f64, f64) {
        let metrics = font.metrics(FontSize::new(self.size), LocationRef::default());
        (f64::from(metrics.ascent), f64::from(-metrics.descent))
    }

    /// Glyphs of `text` with their pen offsets, plus the total advance.
    fn layout(&self, font: &FontRef<'_>, text: &str) -> (Vec<(GlyphId, f32)>, f32) {
        let charmap = font.charmap();
        let metrics = GlyphMetrics::new(font, FontSize::new(self.size), LocationRef::default());
        let mut x = 0.0_f32;
        let glyphs = text
            .chars()
            .filter_map(|ch| charmap.map(ch))
            .map(|gid| {
                let at = x;
                x += metrics.advance_width(gid).unwrap_or(self.size * 0.6);
                (gid, at)
            })
            .collect();
        (glyphs, x)
    }

    /// Outlines of `text` in screen space with the top-left corner at `origin`.
    pub(crate) fn label_path(&self, text: &str, origin: Point) -> BezPath {
        let mut path = BezPath::new();
        let Some(font) = self.font() else {
            return path;
        };
        let (ascent, _) = self.line_metrics(&font);
        let (glyphs, _) = self.layout(&font, text);
        let outlines = font.outline_glyphs();
        for (gid, x) in glyphs {
            let Some(outline) = outlines.get(gid) else {
                continue;
            };
            let mut pen = PathPen {
                path: &mut path,
                baseline: Vec2::new(origin.x + f64::from(x), origin.y + ascent),
            };
            if let Err(err) = outline.draw(FontSize::new(self.size), &mut pen) {
                tracing::debug!(?err, "glyph outline failed");
            }
        }
        path
    }

    fn draw(&mut self, scene: &mut Scene, transform: Affine) {
        for label in core::mem::take(&mut self.pending) {
            let path = self.label_path(&label.text, label.origin);
            if !path.elements().is_empty() {
                scene.fill(Fill::NonZero, transform, label.color, None, &path);
            }
        }
    }
}

impl TextOverlay for GlyphOverlay {
    fn render_label(&mut self, text: &str) -> Size {
        let Some(font) = self.font() else {
            return Size::ZERO;
        };
        let (ascent, descent) = self.line_metrics(&font);
        let (_, width) = self.layout(&font, text);
        Size::new(f64::from(width), ascent + descent)
    }

    fn blit_label(&mut self, text: &str, origin: Point, color: Color) {
        self.pending.push(PendingLabel {
            text: text.to_owned(),
            origin,
            color,
        });
    }
}

/// Appends font-space outlines to a screen-space path.
///
/// Font units point up, so `y` is flipped around the baseline.
struct PathPen<'a> {
    path: &'a mut BezPath,
    baseline: Vec2,
}

impl PathPen<'_> {
    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.baseline.x + f64::from(x), self.baseline.y - f64::from(y))
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.point(cx0, cy0), self.point(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (
            self.point(cx0, cy0),
            self.point(cx1, cy1),
            self.point(x, y),
        );
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

/// Shows overlay labels in the window title instead of drawing glyphs.
#[derive(Debug)]
pub(crate) struct TitleOverlay {
    base: String,
    labels: Vec<String>,
    shown: String,
}

impl TitleOverlay {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            labels: Vec::new(),
            shown: String::new(),
        }
    }

    /// Drops the labels of the previous frame.
    pub(crate) fn begin_frame(&mut self) {
        self.labels.clear();
    }

    pub(crate) fn title(&self) -> String {
        core::iter::once(self.base.as_str())
            .chain(self.labels.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Returns the title if it differs from the one last returned.
    pub(crate) fn take_changed_title(&mut self) -> Option<String> {
        let title = self.title();
        if title == self.shown {
            return None;
        }
        self.shown.clone_from(&title);
        Some(title)
    }
}

impl TextOverlay for TitleOverlay {
    #[allow(
        clippy::cast_precision_loss,
        reason = "label lengths are far below f64 precision limits"
    )]
    fn render_label(&mut self, text: &str) -> Size {
        Size::new(text.chars().count() as f64 * CHAR_WIDTH, LINE_HEIGHT)
    }

    fn blit_label(&mut self, text: &str, _origin: Point, _color: Color) {
        self.labels.push(text.to_owned());
    }
}
