//! Optimal (Belady's MIN) replacement policy.
//!
//! Evicts the page whose next reference lies farthest in the future.
//! Pages that never occur again carry the sentinel `len + 1`, which beats
//! every real step index.

use crate::common::{FrameId, PageId};
use crate::sim::{FrameMetadata, FrameTable};

use super::first_best;

/// Next-use value given to pages with no remaining occurrence.
#[inline]
pub fn never(references: &[PageId]) -> usize {
    references.len() + 1
}

/// Recompute the next-use step of every page for the suffix starting at `step`.
///
/// All pages are updated, resident or not. The suffix is walked backwards
/// so each page ends up with its earliest occurrence at or after `step`.
pub fn compute_next_uses(metadata: &mut [FrameMetadata], references: &[PageId], step: usize) {
    let never = never(references);
    for meta in metadata.iter_mut() {
        meta.set_next_use(never);
    }

    for (idx, page_id) in references.iter().enumerate().skip(step).rev() {
        metadata[page_id.0].set_next_use(idx);
    }
}

/// Select the slot whose page has the largest next-use step.
///
/// Only a strictly larger value displaces the current choice, so among
/// pages that are never used again the leftmost one is evicted.
pub fn select_victim(table: &FrameTable, metadata: &[FrameMetadata]) -> Option<FrameId> {
    first_best(table, metadata, FrameMetadata::next_use, |a, b| a > b)
}
