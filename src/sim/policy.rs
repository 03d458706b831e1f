//! The closed set of replacement policies.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageId};
use crate::sim::replacer::{fifo, lfu, lru, optimal};
use crate::sim::{FrameMetadata, FrameTable};

/// A page replacement policy.
///
/// Each variant maps to the victim selector in [`crate::sim::replacer`].
/// Parsing a name with [`FromStr`] is the only place an unknown policy can
/// show up; once a `Policy` exists, dispatch is an exhaustive `match`.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "lru".parse().unwrap();
/// assert_eq!(policy, Policy::Lru);
/// assert_eq!(policy.name(), "LRU");
/// assert!("MRU".parse::<Policy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Optimal,
    Lru,
    Lfu,
}

impl Policy {
    /// Every policy, in menu order.
    pub const ALL: [Policy; 4] = [Policy::Fifo, Policy::Optimal, Policy::Lru, Policy::Lfu];

    /// Canonical label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Optimal => "OPT",
            Policy::Lru => "LRU",
            Policy::Lfu => "LFU",
        }
    }

    /// Whether a reference updates the page's last-use step before the lookup.
    #[inline]
    pub(crate) fn tracks_recency(self) -> bool {
        matches!(self, Policy::Lru)
    }

    /// Whether a reference bumps the page's use count before the lookup.
    #[inline]
    pub(crate) fn tracks_frequency(self) -> bool {
        matches!(self, Policy::Lfu)
    }

    /// Pick the slot to evict from a full table.
    ///
    /// For [`Policy::Optimal`] the caller must have refreshed next-use
    /// values with [`optimal::compute_next_uses`] for the current step.
    /// Returns `None` only when the table holds no pages.
    pub fn select_victim(self, table: &FrameTable, metadata: &[FrameMetadata]) -> Option<FrameId> {
        match self {
            Policy::Fifo => fifo::select_victim(table, metadata),
            Policy::Optimal => optimal::select_victim(table, metadata),
            Policy::Lru => lru::select_victim(table, metadata),
            Policy::Lfu => lfu::select_victim(table, metadata),
        }
    }

    /// Hook run before victim selection on a full-table miss.
    pub(crate) fn prepare_eviction(
        self,
        metadata: &mut [FrameMetadata],
        references: &[PageId],
        step: usize,
    ) {
        if let Policy::Optimal = self {
            optimal::compute_next_uses(metadata, references, step);
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "opt" | "optimal" | "belady" => Ok(Policy::Optimal),
            "lru" => Ok(Policy::Lru),
            "lfu" => Ok(Policy::Lfu),
            _ => Err(Error::UnsupportedPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        let names: Vec<_> = Policy::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, ["FIFO", "OPT", "LRU", "LFU"]);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("FIFO".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("opt".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!("Optimal".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!(" lfu ".parse::<Policy>().unwrap(), Policy::Lfu);
    }

    #[test]
    fn test_policy_parse_roundtrips_name() {
        for policy in Policy::ALL {
            assert_eq!(policy.name().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_parse_unknown() {
        match "CLOCK".parse::<Policy>() {
            Err(Error::UnsupportedPolicy(name)) => assert_eq!(name, "CLOCK"),
            other => panic!("Expected UnsupportedPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_bookkeeping_flags() {
        assert!(Policy::Lru.tracks_recency());
        assert!(!Policy::Lru.tracks_frequency());
        assert!(Policy::Lfu.tracks_frequency());
        assert!(!Policy::Fifo.tracks_recency());
        assert!(!Policy::Optimal.tracks_frequency());
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(format!("{}", Policy::Optimal), "OPT");
    }
}
