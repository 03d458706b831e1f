//! Per-step results and the derived run summary.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::sim::Policy;

/// Outcome of one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// The referenced page was not resident.
    pub fault: bool,

    /// Page evicted to make room, if any.
    pub victim: Option<PageId>,

    /// Slot the referenced page occupies after this step.
    ///
    /// `None` only when the table has no slots at all.
    pub slot: Option<FrameId>,
}

impl StepResult {
    pub(crate) fn hit(slot: FrameId) -> Self {
        Self {
            fault: false,
            victim: None,
            slot: Some(slot),
        }
    }

    pub(crate) fn fault(slot: Option<FrameId>, victim: Option<PageId>) -> Self {
        Self {
            fault: true,
            victim,
            slot,
        }
    }
}

/// Totals for a finished run, derived from its step results.
///
/// # Example
/// ```
/// use pagesim::{PageId, Policy, ReplacementEngine};
///
/// let refs = [1, 2, 1].map(PageId::new).to_vec();
/// let mut engine = ReplacementEngine::new(refs, 2, 3).unwrap();
/// engine.run(Policy::Fifo);
///
/// let summary = engine.summary().unwrap();
/// assert_eq!(summary.faults, 2);
/// assert_eq!(summary.hits, 1);
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub policy: Policy,
    pub references: usize,
    pub faults: usize,
    pub hits: usize,
    pub evictions: usize,
}

impl RunSummary {
    pub(crate) fn from_results(policy: Policy, results: &[StepResult]) -> Self {
        let faults = results.iter().filter(|r| r.fault).count();
        let evictions = results.iter().filter(|r| r.victim.is_some()).count();
        Self {
            policy,
            references: results.len(),
            faults,
            hits: results.len() - faults,
            evictions,
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary {{ policy: {}, faults: {}, hits: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.policy,
            self.faults,
            self.hits,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty() {
        let summary = RunSummary::from_results(Policy::Lru, &[]);
        assert_eq!(summary.faults, 0);
        assert_eq!(summary.hits, 0);
        assert_eq!(summary.fault_rate(), 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let results = [
            StepResult::fault(Some(FrameId::new(0)), None),
            StepResult::hit(FrameId::new(0)),
            StepResult::fault(Some(FrameId::new(0)), Some(PageId::new(3))),
            StepResult::hit(FrameId::new(0)),
        ];
        let summary = RunSummary::from_results(Policy::Fifo, &results);

        assert_eq!(summary.references, 4);
        assert_eq!(summary.faults, 2);
        assert_eq!(summary.hits, 2);
        assert_eq!(summary.evictions, 1);
        assert_eq!(summary.fault_rate(), 0.5);
    }

    #[test]
    fn test_summary_display() {
        let results = [
            StepResult::fault(Some(FrameId::new(0)), None),
            StepResult::fault(Some(FrameId::new(1)), None),
            StepResult::fault(Some(FrameId::new(0)), Some(PageId::new(1))),
            StepResult::hit(FrameId::new(1)),
        ];
        let display = format!("{}", RunSummary::from_results(Policy::Optimal, &results));

        assert!(display.contains("policy: OPT"));
        assert!(display.contains("faults: 3"));
        assert!(display.contains("75.00%"));
    }
}
