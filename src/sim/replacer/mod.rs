//! Victim selection for each replacement policy.
//!
//! Every selector looks only at the resident slots of a full
//! [`FrameTable`] and the per-page [`FrameMetadata`]:
//! - [`fifo`] - earliest insertion step
//! - [`optimal`] - farthest next use (Belady's MIN)
//! - [`lru`] - oldest last-use step
//! - [`lfu`] - smallest use count
//!
//! Slots are scanned left to right and a candidate replaces the current
//! choice only when it is strictly better, so the first extreme slot wins.

pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod optimal;

use crate::common::FrameId;
use crate::sim::{FrameMetadata, FrameTable};

/// Scan resident slots and return the first one whose key is best.
///
/// `better(candidate, current)` must be a strict comparison.
/// Returns `None` when the table has no resident pages.
pub(crate) fn first_best<K, F, B>(
    table: &FrameTable,
    metadata: &[FrameMetadata],
    key: F,
    better: B,
) -> Option<FrameId>
where
    F: Fn(&FrameMetadata) -> K,
    B: Fn(&K, &K) -> bool,
{
    let mut best: Option<(FrameId, K)> = None;

    for (frame_id, page_id) in table.resident() {
        let candidate = key(&metadata[page_id.0]);
        match &best {
            Some((_, current)) if !better(&candidate, current) => {}
            _ => best = Some((frame_id, candidate)),
        }
    }

    best.map(|(frame_id, _)| frame_id)
}
