//! Containers with their own combination rules.
//!
//! - [`NonEmpty`]: an ordered list with at least one element
//! - [`Validated`]: success or an accumulated, non-empty list of errors
//! - [`AsyncCell`]: a single-shot value delivered later, possibly from
//!   another thread
//!
//! # Examples
//!
//! ## Accumulating Errors
//!
//! ```rust
//! use zipwise::control::{Validated, ValidatedKind};
//! use zipwise::typeclass::Sequence;
//!
//! let checks: Vec<Validated<u8, &str>> = vec![
//!     Validated::valid(1),
//!     Validated::invalid("port out of range"),
//!     Validated::invalid("host is empty"),
//! ];
//! let all = ValidatedKind::sequence(checks);
//! assert_eq!(
//!     all.into_result().map_err(|errors| errors.into_vec()),
//!     Err(vec!["port out of range", "host is empty"])
//! );
//! ```
//!
//! ## Combining Values That Arrive Later
//!
//! ```rust
//! use zipwise::control::AsyncCell;
//!
//! let user: AsyncCell<&str> = AsyncCell::new();
//! let score: AsyncCell<u32> = AsyncCell::new();
//! let summary = user.zip2_with(&score, |user, score| format!("{user}: {score}"));
//!
//! score.fulfill(10).unwrap();
//! user.fulfill("ada").unwrap();
//! assert_eq!(summary.peek().as_deref(), Some("ada: 10"));
//! ```

mod async_cell;
mod nonempty;
mod validated;

pub use async_cell::{AsyncCell, CellError, LateObservers};
pub use nonempty::NonEmpty;
pub use validated::{Validated, ValidatedKind};
