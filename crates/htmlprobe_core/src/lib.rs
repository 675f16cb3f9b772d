//! # htmlprobe_core
//!
//! Demonstration harness for htmlprobe.
//!
//! This crate provides:
//! - The compiled-in markup fixtures
//! - The `Harness`, which feeds a fixture to a `MarkupParser` and turns any
//!   parse failure into a process abort
//!
//! ## Example
//!
//! ```rust,ignore
//! use htmlprobe_core::{Fixture, Harness};
//! use htmlprobe_parser::Html5everParser;
//!
//! let harness = Harness::new(Html5everParser::new());
//! harness.run_or_abort(Fixture::default_fixture());
//! ```

mod error;
mod fixture;
mod harness;

pub use error::ProbeError;
pub use fixture::{CONTAINER, FIXTURES, Fixture, GREETING};
pub use harness::Harness;
pub use htmlprobe_parser::{Html5everParser, MarkupParser, ParseError};
