//! Error types for sources, compositions and pipelines.
//!
//! Two things can go wrong:
//!
//! - A [`Pipeline`](crate::pipeline::Pipeline) is used again after a terminal
//!   pull ([`AlreadyConsumedError`]).
//! - A value that is not an ordered sequence is supplied where one is
//!   required ([`ShapeError`]).
//!
//! [`PipelineError`] unifies both so that callers can use `?` across the
//! whole API.

use thiserror::Error;

/// Represents an error when a pipeline has already been consumed.
///
/// A pipeline is single-use: `take`, `take_all` and every strict operator
/// drain the source and discard the transformer queue. Any later call on the
/// same instance fails with this error.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::AlreadyConsumedError;
///
/// let error = AlreadyConsumedError { method_name: "take" };
/// assert_eq!(
///     format!("{error}"),
///     "Pipeline::take: pipeline already consumed. Build a new pipeline to evaluate again."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Pipeline::{method_name}: pipeline already consumed. Build a new pipeline to evaluate again.")]
pub struct AlreadyConsumedError {
    /// The name of the method that was rejected.
    pub method_name: &'static str,
}

/// Represents a value of the wrong shape at a point that needs a sequence.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::ShapeError;
///
/// let error = ShapeError {
///     operation: "curry_apply",
///     expected: "sequence",
///     found: "scalar",
/// };
/// assert_eq!(format!("{error}"), "curry_apply: expected sequence, found scalar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation}: expected {expected}, found {found}")]
pub struct ShapeError {
    /// The operation that required the shape.
    pub operation: &'static str,
    /// The shape the operation accepts.
    pub expected: &'static str,
    /// The shape that was actually supplied.
    pub found: &'static str,
}

/// Represents every error the crate can report.
///
/// # Examples
///
/// ```rust
/// use lazyseq::error::{AlreadyConsumedError, PipelineError};
///
/// let error = PipelineError::from(AlreadyConsumedError { method_name: "map" });
/// assert!(error.is_already_consumed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The pipeline has already been drained by a terminal pull.
    #[error(transparent)]
    AlreadyConsumed(#[from] AlreadyConsumedError),
    /// A non-sequence was supplied where a sequence is required.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl PipelineError {
    /// Returns `true` if this is a misuse-after-consumption error.
    #[inline]
    pub const fn is_already_consumed(&self) -> bool {
        matches!(self, Self::AlreadyConsumed(_))
    }

    /// Returns `true` if this is a shape error.
    #[inline]
    pub const fn is_shape(&self) -> bool {
        matches!(self, Self::Shape(_))
    }
}
