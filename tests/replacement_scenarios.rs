//! Replacement Engine Tests
//!
//! Textbook reference strings with known fault counts, plus the reset
//! behavior between runs on one engine.

use pagesim::{Error, FrameId, PageId, Policy, ReferenceString, ReplacementEngine};

/// The classic Belady reference string.
const BELADY: &str = "1 2 3 4 1 2 5 1 2 3 4 5";

/// Silberschatz's 20-reference string.
const TEXTBOOK: &str = "7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1";

fn engine(refs: &str, frames: usize) -> ReplacementEngine {
    let refs = ReferenceString::parse(refs, 10).unwrap();
    ReplacementEngine::new(refs, frames, 10).unwrap()
}

fn faults(refs: &str, frames: usize, policy: Policy) -> usize {
    let mut engine = engine(refs, frames);
    engine.run(policy);
    engine.total_faults()
}

// ============================================================================
// Known fault counts
// ============================================================================

#[test]
fn test_belady_three_frames() {
    assert_eq!(faults(BELADY, 3, Policy::Fifo), 9);
    assert_eq!(faults(BELADY, 3, Policy::Lru), 10);
    assert_eq!(faults(BELADY, 3, Policy::Optimal), 7);
}

/// FIFO faults more with four frames than with three.
#[test]
fn test_belady_anomaly_four_frames() {
    assert_eq!(faults(BELADY, 4, Policy::Fifo), 10);
    assert_eq!(faults(BELADY, 4, Policy::Lru), 8);
    assert_eq!(faults(BELADY, 4, Policy::Optimal), 6);
}

#[test]
fn test_textbook_three_frames() {
    assert_eq!(faults(TEXTBOOK, 3, Policy::Fifo), 15);
    assert_eq!(faults(TEXTBOOK, 3, Policy::Lru), 12);
    assert_eq!(faults(TEXTBOOK, 3, Policy::Optimal), 9);
}

#[test]
fn test_single_frame_faults_on_every_change() {
    // Faults exactly when the page differs from the previous reference
    for policy in Policy::ALL {
        assert_eq!(faults("1 1 2 2 2 1 3 3", 1, policy), 4);
    }
}

// ============================================================================
// Run lifecycle
// ============================================================================

/// Running FIFO then LRU on one engine matches two fresh engines.
#[test]
fn test_rerun_matches_fresh_engines() {
    let mut shared = engine(BELADY, 3);

    shared.run(Policy::Fifo);
    let fifo_shared = shared.step_results().to_vec();
    shared.run(Policy::Lru);
    let lru_shared = shared.step_results().to_vec();
    let lru_snapshots = shared.snapshots().to_vec();

    let mut fresh_fifo = engine(BELADY, 3);
    fresh_fifo.run(Policy::Fifo);
    let mut fresh_lru = engine(BELADY, 3);
    fresh_lru.run(Policy::Lru);

    assert_eq!(fifo_shared, fresh_fifo.step_results());
    assert_eq!(lru_shared, fresh_lru.step_results());
    assert_eq!(lru_snapshots, fresh_lru.snapshots());
}

/// Every policy, run twice in a row, repeats itself exactly.
#[test]
fn test_rerun_same_policy_is_identical() {
    let mut engine = engine(TEXTBOOK, 4);

    for policy in Policy::ALL {
        engine.run(policy);
        let first = engine.step_results().to_vec();
        engine.run(policy);
        assert_eq!(first, engine.step_results());
    }
}

#[test]
fn test_lfu_counts_do_not_leak_between_runs() {
    let mut engine = engine("0 0 0 1 2", 2);
    engine.run(Policy::Lfu);
    assert_eq!(engine.metadata(PageId::new(0)).unwrap().use_count(), 3);

    engine.run(Policy::Lfu);
    assert_eq!(engine.metadata(PageId::new(0)).unwrap().use_count(), 3);

    engine.run(Policy::Fifo);
    assert_eq!(engine.metadata(PageId::new(0)).unwrap().use_count(), 0);
}

#[test]
fn test_unsupported_policy_leaves_no_results() {
    let mut engine = engine(BELADY, 3);
    engine.run(Policy::Optimal);

    let err = engine.run_named("random").unwrap_err();
    assert!(matches!(err, Error::UnsupportedPolicy(_)));
    assert!(engine.step_results().is_empty());
    assert_eq!(engine.total_faults(), 0);
    assert!(engine.summary().is_none());
}

// ============================================================================
// Step results
// ============================================================================

#[test]
fn test_slots_fill_left_to_right() {
    let mut engine = engine("5 6 7", 3);
    engine.run(Policy::Fifo);

    let slots: Vec<_> = engine.step_results().iter().map(|r| r.slot).collect();
    assert_eq!(
        slots,
        vec![
            Some(FrameId::new(0)),
            Some(FrameId::new(1)),
            Some(FrameId::new(2))
        ]
    );
}

#[test]
fn test_victim_slot_receives_new_page() {
    let mut engine = engine(BELADY, 3);
    engine.run(Policy::Lru);

    for (step, result) in engine.step_results().iter().enumerate() {
        let table = engine.snapshot(step).unwrap();
        let slot = result.slot.unwrap();
        assert_eq!(table.get(slot), Some(engine.references()[step]));
    }
}

#[test]
fn test_resident_pages_never_duplicate() {
    let mut engine = engine(TEXTBOOK, 4);

    for policy in Policy::ALL {
        engine.run(policy);
        for table in engine.snapshots() {
            let mut pages: Vec<_> = table.resident().map(|(_, page)| page).collect();
            let total = pages.len();
            pages.sort();
            pages.dedup();
            assert_eq!(pages.len(), total);
        }
    }
}

#[test]
fn test_summary_matches_results() {
    let mut engine = engine(TEXTBOOK, 3);
    engine.run(Policy::Fifo);

    let summary = engine.summary().unwrap();
    assert_eq!(summary.policy, Policy::Fifo);
    assert_eq!(summary.references, 20);
    assert_eq!(summary.faults, 15);
    assert_eq!(summary.hits, 5);
    // Every fault after the first three evicts
    assert_eq!(summary.evictions, 12);
}
