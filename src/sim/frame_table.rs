//! The physical frame table: which virtual page sits in which slot.

use std::fmt;

use crate::common::{FrameId, PageId};

/// One snapshot of the physical frame table.
///
/// Each slot is either empty (`None`) or holds a resident page. A page
/// occupies at most one slot: the engine only inserts on a miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Create a table of `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Page held by `frame_id`, or `None` if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied().flatten()
    }

    /// Raw slot view, left to right.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Slot holding `page_id`, if it is resident.
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| *slot == Some(page_id))
            .map(FrameId::new)
    }

    /// Lowest-numbered empty slot.
    pub fn first_free(&self) -> Option<FrameId> {
        self.slots
            .iter()
            .position(Option::is_none)
            .map(FrameId::new)
    }

    /// Occupied slots as `(slot, page)` pairs, left to right.
    pub fn resident(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.map(|page| (FrameId::new(idx), page)))
    }

    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.first_free().is_none()
    }

    /// Put `page_id` into `frame_id`, returning whatever was there before.
    ///
    /// # Panics
    /// Panics if `frame_id` is outside the table.
    pub fn load(&mut self, frame_id: FrameId, page_id: PageId) -> Option<PageId> {
        self.slots[frame_id.0].replace(page_id)
    }
}

impl fmt::Display for FrameTable {
    /// Renders the occupied slots as `[a, b, c]`; empty slots are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (_, page)) in self.resident().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page.0)?;
        }
        write!(f, "]")
    }
}
