//! Normalizing arbitrary input into a pull cursor.
//!
//! Every pipeline and every composition starts from an [`Input`], which
//! captures the three shapes a caller may hand over:
//!
//! - nothing at all ([`Input::Absent`])
//! - a single value ([`Input::Scalar`])
//! - an ordered sequence ([`Input::Sequence`])
//!
//! [`SourceCursor`] turns an `Input` into a forward-only cursor over the
//! elements it stands for:
//!
//! ```text
//! Absent        -> []
//! Scalar(x)     -> [x]
//! Sequence(xs)  -> xs
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::source::{Input, SourceCursor};
//!
//! let mut cursor = SourceCursor::new(vec![1, 2]);
//! assert!(cursor.has_more());
//! assert_eq!(cursor.advance(), Some(1));
//! assert_eq!(cursor.advance(), Some(2));
//! assert_eq!(cursor.advance(), None);
//!
//! let mut empty = SourceCursor::new(Input::<i32>::absent());
//! assert!(!empty.has_more());
//! ```

mod cursor;
mod input;

pub use cursor::SourceCursor;
pub use input::Input;
