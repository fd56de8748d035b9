//! Eager composition of transformers.
//!
//! This module runs a value through an ordered list of transformers in one
//! go, with no deferred evaluation. Each transformer consumes the *entire*
//! output of the previous one.
//!
//! # Overview
//!
//! - [`Curry`]: a runtime list of same-typed transformers, invoked in one of
//!   three [`Invocation`] modes
//! - [`curry`], [`curry_call`], [`curry_apply`]: constructors for each mode
//! - [`chain!`]: compile-time chain of transformers whose element types may
//!   change from step to step
//!
//! # Examples
//!
//! ## Runtime list
//!
//! ```
//! use lazyseq::combinator::{filter, map};
//! use lazyseq::compose::curry;
//!
//! let composed = curry([map(|x: i32| x + 1), filter(|x: &i32| x % 2 == 0)]);
//! assert_eq!(composed.call(vec![1, 2, 3, 4]), Ok(vec![2, 4]));
//! ```
//!
//! ## Heterogeneous chain
//!
//! ```
//! use lazyseq::chain;
//! use lazyseq::combinator::{fold_left, map};
//!
//! let total_length = chain!(
//!     vec!["ab", "cde"],
//!     map(|text: &str| text.len()),
//!     fold_left(0, |total, length: usize, _| total + length),
//! );
//! assert_eq!(total_length, vec![5]);
//! ```
//!
//! # Invocation Modes
//!
//! ```text
//! mode    | absent | scalar x | sequence xs
//! --------+--------+----------+------------
//! Spread  | []     | [x]      | xs
//! Raw     | error  | [x]      | xs
//! Apply   | error  | error    | xs
//! ```
//!
//! # Laws
//!
//! - **Left Identity**: `curry([Transformer::identity(), t])` behaves as `t`
//! - **Right Identity**: `curry([t, Transformer::identity()])` behaves as `t`
//! - **Associativity**: `curry([t1, t2, t3])` behaves as
//!   `curry([curry([t1, t2]).into_transformer(), t3])`

mod chain_macro;
mod curry;

pub use curry::{Curry, Invocation, curry, curry_apply, curry_call};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
