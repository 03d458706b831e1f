//! LRU (Least Recently Used) replacement policy.

use crate::common::FrameId;
use crate::sim::{FrameMetadata, FrameTable};

use super::first_best;

/// Select the slot whose page has the oldest last-use step.
///
/// The faulting page has already had its last use set to the current
/// step, but it is not resident, so it can never be chosen here.
pub fn select_victim(table: &FrameTable, metadata: &[FrameMetadata]) -> Option<FrameId> {
    first_best(table, metadata, FrameMetadata::last_use, |a, b| a < b)
}
