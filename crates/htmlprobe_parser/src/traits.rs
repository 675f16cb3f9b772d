//! Markup parser trait definition.

use std::io::Read;

use crate::ParseError;

/// Trait for parsing a character stream into a document tree.
///
/// The document type is left to the implementation. Callers that only care
/// whether parsing succeeded can drop it without looking inside.
///
/// # Example
///
/// ```rust,ignore
/// use std::io::Read;
/// use htmlprobe_parser::{MarkupParser, ParseError};
///
/// struct MyParser;
///
/// impl MarkupParser for MyParser {
///     type Document = String;
///
///     fn name(&self) -> &str {
///         "my-parser"
///     }
///
///     fn parse(&self, reader: &mut dyn Read) -> Result<String, ParseError> {
///         let mut text = String::new();
///         reader.read_to_string(&mut text)?;
///         Ok(text)
///     }
/// }
/// ```
pub trait MarkupParser {
    /// The parsed document tree.
    type Document;

    /// Returns the name of this parser.
    fn name(&self) -> &str;

    /// Parses everything `reader` yields into a document tree.
    fn parse(&self, reader: &mut dyn Read) -> Result<Self::Document, ParseError>;

    /// Parses an in-memory string through a byte reader over it.
    fn parse_str(&self, source: &str) -> Result<Self::Document, ParseError> {
        let mut reader = source.as_bytes();
        self.parse(&mut reader)
    }
}
