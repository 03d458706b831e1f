//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// The replay itself is deterministic, so none of these are transient:
/// every variant means the caller handed over something the engine
/// cannot simulate.
#[derive(Debug, Error)]
pub enum Error {
    /// A policy name that does not match any known replacement policy.
    ///
    /// The run is aborted and no step results are kept.
    #[error("Unsupported replacement policy: {0}")]
    UnsupportedPolicy(String),

    /// Inputs rejected before a simulation can start.
    ///
    /// Out-of-range page references, an empty virtual space, or a
    /// reference string with no usable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O error while loading a reference string.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
