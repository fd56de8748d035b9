//! # lazyseq
//!
//! Composable sequence transformers and a single-use lazy pipeline.
//!
//! ## Overview
//!
//! - **Source Wrapper**: normalizes absent, scalar, or sequence input into a
//!   forward-only cursor ([`source`])
//! - **Combinators**: `map`, `filter`, `unmonad`, `fold_left`, `rebox`
//!   ([`combinator`])
//! - **Composition**: eager, whole-batch application of transformer lists
//!   ([`compose`])
//! - **Lazy Pipeline**: dot-chainable builder that defers evaluation until a
//!   bounded number of results is pulled ([`pipeline`])
//!
//! ## Feature Flags
//!
//! - `compose`: Composition engine and the `chain!` macro
//! - `pipeline`: Lazy pipeline (implies `compose`)
//! - `serde`: `Serialize`/`Deserialize` for [`source::Input`]
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Terminal pulls and compositions emit `tracing` events at `debug` and
//! `trace` level. Install any `tracing` subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! # fn main() -> Result<(), PipelineError> {
//! let mut pipeline = Pipeline::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
//! pipeline
//!     .map(|x| x + 1)?
//!     .filter(|x| x % 2 == 0)?
//!     .map(|x| x * 2)?;
//! assert_eq!(pipeline.take(3)?, vec![4, 8, 12]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinator::*;
    pub use crate::error::*;
    pub use crate::source::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "pipeline")]
    pub use crate::pipeline::*;
}

pub mod combinator;
pub mod error;
pub mod source;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "pipeline")]
pub mod pipeline;
