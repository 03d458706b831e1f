//! The replacement simulation engine.
//!
//! Replays a reference string against a fixed number of physical frames
//! under one replacement policy at a time.
//!
//! # Components
//! - [`ReplacementEngine`] - Owns per-run state and drives the replay
//! - [`FrameMetadata`] - Per-page usage signals read by the policies
//! - [`FrameTable`] - One snapshot of the resident set
//! - [`StepResult`] / [`RunSummary`] - What each step and each run produced
//! - [`Policy`] - The closed set of replacement policies
//! - [`replacer`] - Victim selection for each policy

mod engine;
mod frame;
mod frame_table;
mod policy;
pub mod replacer;
mod step;

pub use engine::ReplacementEngine;
pub use frame::FrameMetadata;
pub use frame_table::FrameTable;
pub use policy::Policy;
pub use step::{RunSummary, StepResult};
