// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal scene runtime for anomap.
//!
//! This crate holds the primitives that the chart layer compiles into and the
//! renderer consumes:
//! - **Marks** are drawable items (rects, text, paths) with stable identities
//!   and an explicit `z_index` for paint ordering.
//! - A **Scene** owns the current mark set and diffs replacement sets into
//!   enter/update/exit [`MarkDiff`]s, so a rebuild replaces marks in place
//!   instead of accumulating duplicates.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{Mark, MarkId, MarkPayload, PathMark, RectMark, TextAnchor, TextBaseline, TextMark};
pub use scene::{MarkDiff, Scene};
