//! Error taxonomy for toolpath planning.

use thiserror::Error;

/// Errors that can occur during toolpath planning.
#[derive(Debug, Error)]
pub enum Error {
    /// The sequencer was handed zero segments. There is no first
    /// reference point to start the traversal from, so this is a
    /// precondition failure rather than an empty result.
    #[error("no segments to sequence: input geometry is empty")]
    EmptyInput,

    /// Scale-to-fit was requested with non-positive target bounds.
    #[error("invalid fit bounds: {width} x {height} (both must be positive)")]
    InvalidFit { width: f64, height: f64 },
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
