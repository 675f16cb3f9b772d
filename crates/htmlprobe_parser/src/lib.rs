//! # htmlprobe_parser
//!
//! Markup parser seam for htmlprobe.
//!
//! This crate provides:
//! - A `MarkupParser` trait for anything that turns a character stream into a
//!   document tree
//! - Built-in HTML parser using `html5ever`
//!
//! ## Example
//!
//! ```rust,ignore
//! use htmlprobe_parser::{Html5everParser, MarkupParser};
//!
//! let parser = Html5everParser::new();
//! let document = parser.parse_str("<p>Hello</p>")?;
//! ```

mod error;
mod html;
mod traits;

pub use error::ParseError;
pub use html::{Html5everParser, HtmlDocument};
pub use traits::MarkupParser;
