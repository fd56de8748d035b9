//! Elementary sequence transformers.
//!
//! This module provides the building blocks shared by the composition engine
//! and the lazy pipeline. Every combinator returns a [`Transformer`], a pure
//! function from one ordered batch to another.
//!
//! # Overview
//!
//! Lazy combinators work element by element:
//!
//! - [`map`]: one output per input, value replaced
//! - [`filter`]: zero or one output per input, value unchanged
//! - [`unmonad`]: any number of outputs per input, produced by a host function
//!
//! Strict combinators need the whole sequence:
//!
//! - [`fold_left`]: left fold into a one-element batch
//! - [`accumulate`]: the same fold, returning the bare accumulator
//! - [`rebox`]: lifts a scalar-returning function back into a transformer
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::combinator::{filter, fold_left, map};
//!
//! let transformer = map(|x: i32| x + 1)
//!     .then(filter(|x: &i32| x % 2 == 0))
//!     .then(fold_left(0, |total, x: i32, _| total + x));
//!
//! // 1..=4 -> 2, 3, 4, 5 -> 2, 4 -> 6
//! assert_eq!(transformer.apply(vec![1, 2, 3, 4]), vec![6]);
//! ```
//!
//! # Laws
//!
//! - **Map Identity**: `map(|x| x)` behaves as [`Transformer::identity`]
//! - **Map Composition**: `map(f).then(map(g)) == map(|x| g(f(x)))`
//! - **Filter Idempotence**: `filter(p).then(filter(p)) == filter(p)`

mod lazy;
mod strict;
mod transformer;

pub use lazy::{filter, map, unmonad};
pub use strict::{accumulate, fold_left, rebox};
pub use transformer::Transformer;
