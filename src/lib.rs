//! POSIX-style pattern matching with positional backreference templates.
//!
//! A [`Pattern`] is compiled once from its text and flags and can then be
//! used to find the first match in a subject, scan for every
//! non-overlapping match, or rewrite matches with a template such as
//! `\2:\1`, where `\n` stands for what group `n` captured.
//!
//! ```
//! use regsub::Pattern;
//!
//! let re = Pattern::new("([a-z]+)-([0-9]+)").unwrap();
//! assert_eq!(re.replace("item-42", r"\2:\1").unwrap().as_deref(), Some("42:item"));
//!
//! let m = Pattern::new("[0-9]+").unwrap().find("abc123def").unwrap();
//! assert_eq!((m.from(), m.to(), m.as_str()), (4, 6, "123"));
//! ```
//!
//! The [`host`] module wraps all of this for embedding in a scripting
//! runtime: plain return values, no errors, 1-based offsets.

mod exec;
mod group;
mod options;
mod pattern;
mod replace;
mod scan;
mod span;
mod syntax;

pub mod constants;
pub mod error;
pub mod flags;
pub mod host;

pub use error::{Error, Result};
pub use flags::Flags;
pub use group::GroupCount;
pub use options::Options;
pub use pattern::Pattern;
pub use replace::{substitute_one, Template};
pub use scan::Matches;
pub use span::{MatchRecord, Span};
