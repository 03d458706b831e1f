//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has been resident the longest. Hits do not
//! refresh a page's position: only loading it does.

use crate::common::FrameId;
use crate::sim::{FrameMetadata, FrameTable};

use super::first_best;

/// Select the slot whose page has the earliest insertion step.
pub fn select_victim(table: &FrameTable, metadata: &[FrameMetadata]) -> Option<FrameId> {
    first_best(table, metadata, FrameMetadata::inserted, |a, b| a < b)
}
