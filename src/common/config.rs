//! Configuration constants for the simulator.

/// Largest physical frame count the CLI accepts.
///
/// The engine itself has no ceiling: it allocates a frame table of whatever
/// capacity it is given. This bound belongs to the command-line front end,
/// which keeps the per-step listing readable.
pub const MAX_PHYSICAL_FRAMES: usize = 7;

/// Size of the virtual page space when none is given.
///
/// Reference strings then draw pages from `0..=9`.
pub const DEFAULT_VIRTUAL_PAGES: usize = 10;
