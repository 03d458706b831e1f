//! Per-page usage metadata consumed by the eviction policies.
//!
//! One [`FrameMetadata`] exists for every page of the virtual space. The
//! fields are plain overwrites: all the policy logic that reads them lives
//! in the engine and the replacers.

/// Usage signals tracked for one virtual page.
///
/// Step indices are positions in the reference string. `None` is the
/// "unset" sentinel: the page has not been loaded, referenced, or had its
/// next use computed since the current run began.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameMetadata {
    /// Step at which the page was last loaded into a physical frame.
    inserted: Option<usize>,

    /// Step of the page's next occurrence (Optimal only).
    next_use: Option<usize>,

    /// Step of the page's most recent reference (LRU only).
    last_use: Option<usize>,

    /// References since the run began (LFU only).
    use_count: u64,
}

impl FrameMetadata {
    /// Create metadata with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the page was loaded at `step`.
    #[inline]
    pub fn record_insertion(&mut self, step: usize) {
        self.inserted = Some(step);
    }

    /// Record a reference at `step`: refreshes last use and bumps the count.
    #[inline]
    pub fn record_reference(&mut self, step: usize) {
        self.record_last_use(step);
        self.increment_use_count();
    }

    /// Set only the last-use step.
    #[inline]
    pub fn record_last_use(&mut self, step: usize) {
        self.last_use = Some(step);
    }

    /// Bump only the use count.
    #[inline]
    pub fn increment_use_count(&mut self) {
        self.use_count += 1;
    }

    #[inline]
    pub fn set_next_use(&mut self, step: usize) {
        self.next_use = Some(step);
    }

    #[inline]
    pub fn inserted(&self) -> Option<usize> {
        self.inserted
    }

    #[inline]
    pub fn next_use(&self) -> Option<usize> {
        self.next_use
    }

    #[inline]
    pub fn last_use(&self) -> Option<usize> {
        self.last_use
    }

    #[inline]
    pub fn use_count(&self) -> u64 {
        self.use_count
    }
}

/// Allocate a fresh metadata table for `virtual_pages` pages.
///
/// The engine calls this at the start of every run instead of clearing
/// fields in place.
pub(crate) fn fresh_table(virtual_pages: usize) -> Vec<FrameMetadata> {
    vec![FrameMetadata::new(); virtual_pages]
}
