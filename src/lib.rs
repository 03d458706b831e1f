//! pagesim - A demand-paging simulator with swappable replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         Front End (main.rs, reference, report)          │   │
//! │  │    Read/Generate Reference String → Render Listing      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacement Engine (sim/)                  │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Policies: FIFO | OPT | LRU | LFU              │   │   │
//! │  │   │        (chosen per run, same engine)             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   ReplacementEngine + FrameTable + StepResult           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Frame Metadata (sim/frame.rs)                │   │
//! │  │   inserted | next use | last use | use count per page   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - The replacement engine and eviction policies
//! - [`reference`] - Reference string parsing and generation
//! - [`report`] - Console listing of a run
//!
//! # Quick Start
//! ```
//! use pagesim::{Policy, ReferenceString, ReplacementEngine};
//!
//! let refs = ReferenceString::parse("1 2 3 4 1 2 5 1 2 3 4 5", 10).unwrap();
//! let mut engine = ReplacementEngine::new(refs, 3, 10).unwrap();
//!
//! engine.run(Policy::Lru);
//! assert_eq!(engine.total_faults(), 10);
//! ```

pub mod common;
pub mod reference;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_VIRTUAL_PAGES, MAX_PHYSICAL_FRAMES};
pub use common::{Error, FrameId, PageId, Result};

pub use reference::ReferenceString;
pub use report::Report;
pub use sim::{FrameMetadata, FrameTable, Policy, ReplacementEngine, RunSummary, StepResult};
