//! Stateful, single-use lazy pipelines.
//!
//! A [`Pipeline`] binds one [`SourceCursor`](crate::source::SourceCursor) to
//! one [`TransformerQueue`]. Chaining calls grow the queue without running
//! anything; a terminal pull drains the cursor element by element and then
//! discards both.
//!
//! # State Machine
//!
//! ```text
//!            map / filter / unmonad / then
//!                  +--------+
//!                  |        v
//! new(source) -> [ Open ] --+
//!                  |
//!                  | take / take_all / seq / strict / fold_left / seq_unmonad
//!                  | map_into / unmonad_into / then_into
//!                  v
//!             [ Consumed ] -- any call --> PipelineError::AlreadyConsumed
//! ```
//!
//! The `_wrap` variants of strict operators, and `seq`, return a fresh `Open`
//! pipeline over their result. The `_into` variants of lazy operators move
//! the cursor and every queued step into an `Open` pipeline of the new
//! element type without pulling anything. Either way the old pipeline stays
//! `Consumed`.
//!
//! # Bounded Pulls
//!
//! `take(n)` pulls one source element at a time, runs it through the
//! composed queue and appends the outputs to the result, stopping as soon as
//! `n` results are collected or the source runs out. A pulled element that
//! expands past the remaining room is truncated; the overflow is dropped.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::pipeline::Pipeline;
//!
//! # fn main() -> Result<(), lazyseq::error::PipelineError> {
//! let mut pipeline = Pipeline::new(vec![4, 8, 15, 16, 23, 42]);
//! pipeline.filter(|x| x % 2 == 0)?.map(|x| x / 2)?;
//!
//! let mut halves = pipeline.seq()?;
//! assert!(pipeline.is_consumed());
//!
//! let total = halves.fold_left(0, |total, x, _| total + x)?;
//! assert_eq!(total, 2 + 4 + 8 + 21);
//! # Ok(())
//! # }
//! ```

mod lazy;
mod queue;

pub use lazy::{Pipeline, PipelineState, UNBOUNDED};
pub use queue::TransformerQueue;
