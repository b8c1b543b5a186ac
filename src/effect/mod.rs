//! Environment-reading computations.
//!
//! - [`Reader`]: a computation that produces a value from a shared,
//!   read-only environment
//! - [`zip2_in`]: zips two readers whose results are containers of a
//!   [`Zip`](crate::typeclass::Zip) kind
//!
//! ```rust
//! use zipwise::effect::Reader;
//!
//! let readers: Vec<Reader<u32, u32>> = vec![
//!     Reader::ask(),
//!     Reader::new(|base| base * base),
//!     Reader::pure(1),
//! ];
//! assert_eq!(Reader::sequence(readers).run(3), vec![3, 9, 1]);
//! ```

mod reader;

pub use reader::{Reader, zip2_in};
