//! Replacement Engine - replays one policy over a reference string.
//!
//! The [`ReplacementEngine`] owns all per-run state:
//! - Per-page usage metadata
//! - The history of frame table snapshots, one per step
//! - The step results
//!
//! All of it is rebuilt from scratch at the start of every run.

use log::{debug, trace};

use crate::common::{Error, FrameId, PageId, Result};
use crate::sim::frame::fresh_table;
use crate::sim::{FrameMetadata, FrameTable, Policy, RunSummary, StepResult};

/// Simulates demand paging for a fixed reference string.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                     ReplacementEngine                       │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │ references   │  │  metadata: Vec<FrameMetadata>     │   │
/// │  │ Vec<PageId>  │─▶│  [Page0] [Page1] ... [PageV-1]    │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
/// │  │  snapshots   │  │   results    │  │   policy     │      │
/// │  │Vec<FrameTbl> │  │Vec<StepResult│  │Option<Policy>│      │
/// │  └──────────────┘  └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use pagesim::{PageId, Policy, ReplacementEngine};
///
/// let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// let mut engine = ReplacementEngine::new(refs, 3, 10).unwrap();
///
/// engine.run(Policy::Fifo);
/// assert_eq!(engine.total_faults(), 9);
///
/// engine.run(Policy::Optimal);
/// assert_eq!(engine.total_faults(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct ReplacementEngine {
    /// The reference string (read-only after construction).
    references: Vec<PageId>,

    /// Number of physical frames.
    physical_capacity: usize,

    /// Size of the virtual page space.
    virtual_pages: usize,

    /// Usage metadata indexed by page number.
    metadata: Vec<FrameMetadata>,

    /// Resident set after each step.
    snapshots: Vec<FrameTable>,

    /// One result per step of the last completed run.
    results: Vec<StepResult>,

    /// Policy of the last completed run.
    policy: Option<Policy>,
}

impl ReplacementEngine {
    /// Create an engine for `references`.
    ///
    /// # Arguments
    /// * `references` - The reference string
    /// * `physical_capacity` - Number of physical frames (0 is allowed)
    /// * `virtual_pages` - Size of the virtual page space
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `virtual_pages` is 0 or any
    ///   reference is outside `[0, virtual_pages)`
    pub fn new(
        references: impl Into<Vec<PageId>>,
        physical_capacity: usize,
        virtual_pages: usize,
    ) -> Result<Self> {
        let references = references.into();

        if virtual_pages == 0 {
            return Err(Error::InvalidConfiguration(
                "virtual page space must hold at least one page".to_string(),
            ));
        }

        if let Some((step, page)) = references
            .iter()
            .enumerate()
            .find(|(_, page)| page.0 >= virtual_pages)
        {
            return Err(Error::InvalidConfiguration(format!(
                "reference {} at step {} is outside the virtual space of {} pages",
                page.0, step, virtual_pages
            )));
        }

        Ok(Self {
            references,
            physical_capacity,
            virtual_pages,
            metadata: fresh_table(virtual_pages),
            snapshots: Vec::new(),
            results: Vec::new(),
            policy: None,
        })
    }

    // ========================================================================
    // Public API: Running
    // ========================================================================

    /// Replay the whole reference string under `policy`.
    ///
    /// Any state left from an earlier run is discarded first, so the outcome
    /// matches a freshly constructed engine.
    pub fn run(&mut self, policy: Policy) {
        self.reset();
        debug!(
            "Simulating {} over {} references with {} frames",
            policy,
            self.references.len(),
            self.physical_capacity
        );

        let mut table = FrameTable::new(self.physical_capacity);
        self.snapshots.reserve(self.references.len());
        self.results.reserve(self.references.len());

        for step in 0..self.references.len() {
            let result = self.replay_step(policy, &mut table, step);
            self.results.push(result);
            self.snapshots.push(table.clone());
        }

        self.policy = Some(policy);
        debug!(
            "{} finished: {} faults in {} references",
            policy,
            self.total_faults(),
            self.references.len()
        );
    }

    /// Parse `name` and run that policy.
    ///
    /// # Errors
    /// - `Error::UnsupportedPolicy` if `name` is not a known policy. The
    ///   engine is left with no results, including those of earlier runs.
    pub fn run_named(&mut self, name: &str) -> Result<()> {
        match name.parse::<Policy>() {
            Ok(policy) => {
                self.run(policy);
                Ok(())
            }
            Err(err) => {
                self.reset();
                Err(err)
            }
        }
    }

    // ========================================================================
    // Public API: Results
    // ========================================================================

    /// Results of the last run, one per reference. Empty before any run.
    pub fn step_results(&self) -> &[StepResult] {
        &self.results
    }

    /// Number of faulting steps in the last run.
    pub fn total_faults(&self) -> usize {
        self.results.iter().filter(|r| r.fault).count()
    }

    /// Label of the last policy run, or `None` before any run.
    pub fn algorithm_name(&self) -> Option<&'static str> {
        self.policy.map(Policy::name)
    }

    /// Policy of the last run.
    pub fn policy(&self) -> Option<Policy> {
        self.policy
    }

    /// Totals for the last run, or `None` before any run.
    pub fn summary(&self) -> Option<RunSummary> {
        self.policy
            .map(|policy| RunSummary::from_results(policy, &self.results))
    }

    /// Resident set after `step`.
    pub fn snapshot(&self, step: usize) -> Option<&FrameTable> {
        self.snapshots.get(step)
    }

    /// Resident set after every step of the last run.
    pub fn snapshots(&self) -> &[FrameTable] {
        &self.snapshots
    }

    /// Usage metadata for `page_id` as left by the last run.
    pub fn metadata(&self, page_id: PageId) -> Option<&FrameMetadata> {
        self.metadata.get(page_id.0)
    }

    // ========================================================================
    // Public API: Configuration
    // ========================================================================

    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    pub fn physical_capacity(&self) -> usize {
        self.physical_capacity
    }

    pub fn virtual_pages(&self) -> usize {
        self.virtual_pages
    }

    // ========================================================================
    // Internal: Replay
    // ========================================================================

    /// Drop every trace of the previous run.
    fn reset(&mut self) {
        self.metadata = fresh_table(self.virtual_pages);
        self.snapshots.clear();
        self.results.clear();
        self.policy = None;
    }

    /// Process the reference at `step`, mutating `table` in place.
    fn replay_step(&mut self, policy: Policy, table: &mut FrameTable, step: usize) -> StepResult {
        let page_id = self.references[step];

        // Referencing a page counts even when it faults
        if policy.tracks_recency() {
            self.metadata[page_id.0].record_last_use(step);
        } else if policy.tracks_frequency() {
            self.metadata[page_id.0].increment_use_count();
        }

        if let Some(frame_id) = table.find(page_id) {
            return StepResult::hit(frame_id);
        }

        if let Some(frame_id) = table.first_free() {
            self.load(table, frame_id, page_id, step);
            return StepResult::fault(Some(frame_id), None);
        }

        // Full table: pick a victim
        policy.prepare_eviction(&mut self.metadata, &self.references, step);
        match policy.select_victim(table, &self.metadata) {
            Some(frame_id) => {
                let victim = self.load(table, frame_id, page_id, step);
                trace!(
                    "step {}: {} evicted {:?} from {} for {}",
                    step,
                    policy,
                    victim,
                    frame_id,
                    page_id
                );
                StepResult::fault(Some(frame_id), victim)
            }
            // No slots at all
            None => StepResult::fault(None, None),
        }
    }

    /// Put `page_id` in `frame_id` and stamp its insertion step.
    fn load(
        &mut self,
        table: &mut FrameTable,
        frame_id: FrameId,
        page_id: PageId,
        step: usize,
    ) -> Option<PageId> {
        self.metadata[page_id.0].record_insertion(step);
        table.load(frame_id, page_id)
    }
}
