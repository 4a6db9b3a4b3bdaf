// Copyright 2026 the Anomap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene ownership and mark diffing.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::mark::{Mark, MarkId, MarkPayload};

/// The difference between two successive mark sets for one id.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// The mark did not exist before this tick.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Paint order of the entering mark.
        z_index: i32,
        /// Payload of the entering mark.
        new: MarkPayload,
    },
    /// The mark existed and its z-index or payload changed.
    Update {
        /// Mark identity.
        id: MarkId,
        /// Paint order after the update.
        new_z_index: i32,
        /// Payload after the update.
        new: MarkPayload,
    },
    /// The mark existed and is no longer present.
    Exit {
        /// Mark identity.
        id: MarkId,
    },
}

/// The current mark set, with diffing against replacement sets.
///
/// [`Scene::tick`] is the single write path: chart code rebuilds its full mark
/// list and hands it over; the scene reports what changed. Because chart
/// generators use stable ids, rebuilding the same chart twice yields no diffs
/// at all, and rebuilding with new data yields updates/exits rather than a
/// second copy of every mark.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of marks currently in the scene.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the mark with the given id, if present.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns all marks sorted by `(z_index, id)` for deterministic painting.
    pub fn marks_in_paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces the scene's marks with `new_marks` and returns the diffs.
    ///
    /// If `new_marks` contains duplicate ids, the last occurrence wins.
    /// Diffs are sorted by id for deterministic consumption.
    pub fn tick(&mut self, new_marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(new_marks.len());
        for mark in new_marks {
            next.insert(mark.id, mark);
        }

        let mut diffs = Vec::new();
        for (id, mark) in &next {
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    z_index: mark.z_index,
                    new: mark.payload.clone(),
                }),
                Some(prev) => {
                    if prev.z_index != mark.z_index || prev.payload != mark.payload {
                        diffs.push(MarkDiff::Update {
                            id: *id,
                            new_z_index: mark.z_index,
                            new: mark.payload.clone(),
                        });
                    }
                }
            }
        }
        for id in self.marks.keys() {
            if !next.contains_key(id) {
                diffs.push(MarkDiff::Exit { id: *id });
            }
        }

        diffs.sort_by_key(|d| match d {
            MarkDiff::Enter { id, .. } | MarkDiff::Update { id, .. } | MarkDiff::Exit { id } => *id,
        });
        self.marks = next;
        diffs
    }
}
