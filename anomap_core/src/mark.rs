// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types: drawable scene items with stable identities.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identity.
///
/// Chart generators assign ids deterministically (typically a base plus an
/// offset per generated mark) so that rebuilding the same chart produces the
/// same ids and [`crate::Scene::tick`] sees updates rather than fresh marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the start (left edge, for LTR text) of the line.
    Start,
    /// The position is the horizontal center of the line.
    Middle,
    /// The position is the end (right edge) of the line.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the vertical midline.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the hanging baseline (top of the line box).
    Hanging,
    /// The position is the ideographic baseline.
    Ideographic,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A single line of (unshaped) text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees, about `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// A stroked and/or filled path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0.0` means no stroke.
    pub stroke_width: f64,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A text line.
    Text(TextMark),
    /// A stroked/filled path.
    Path(PathMark),
}

impl MarkPayload {
    /// Returns geometry bounds in scene coordinates.
    ///
    /// Text bounds depend on shaping, which lives downstream, so text marks
    /// return `None` here; renderers that need text extents estimate them with
    /// their own metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// A drawable scene item: identity, paint order, and payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity, unique within a scene.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)` for a deterministic
    /// tie-break.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark with the default z-index of `0`.
    pub fn new(id: MarkId, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index: 0,
            payload,
        }
    }

    /// Convenience constructor for a filled rectangle mark.
    pub fn rect(id: MarkId, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        )
    }

    /// Convenience constructor for a text mark with default styling.
    pub fn text(id: MarkId, pos: Point, text: impl Into<String>) -> Self {
        Self::new(
            id,
            MarkPayload::Text(TextMark {
                pos,
                text: text.into(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: Brush::default(),
            }),
        )
    }

    /// Convenience constructor for a stroked path mark.
    pub fn stroked_path(
        id: MarkId,
        path: BezPath,
        stroke: impl Into<Brush>,
        stroke_width: f64,
    ) -> Self {
        Self::new(
            id,
            MarkPayload::Path(PathMark {
                path,
                fill: Brush::default(),
                stroke: stroke.into(),
                stroke_width,
            }),
        )
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}
