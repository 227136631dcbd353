//! # Battle Development Tools
//!
//! Command-line tools for development:
//! - Ruleset validation
//! - Battle simulation from scenario files or inline armies

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod simulate;
pub mod validate;

pub use error::{Result, ToolError};
