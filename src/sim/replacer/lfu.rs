//! LFU (Least Frequently Used) replacement policy.
//!
//! Use counts accumulate for the whole run. Eviction does not reset a
//! page's count, so a page that comes back keeps its history.

use crate::common::FrameId;
use crate::sim::{FrameMetadata, FrameTable};

use super::first_best;

/// Select the slot whose page has the smallest use count.
pub fn select_victim(table: &FrameTable, metadata: &[FrameMetadata]) -> Option<FrameId> {
    first_best(table, metadata, FrameMetadata::use_count, |a, b| a < b)
}
