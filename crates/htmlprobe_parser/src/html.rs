//! HTML parser using html5ever (servo/html5ever).
//!
//! The tree is built into `markup5ever_rcdom`'s reference-counted DOM. The
//! input is decoded as UTF-8 (lossy), so only a failing reader can make
//! parsing fail; malformed markup is repaired the way browsers repair it.

use std::io::Read;

use html5ever::tendril::TendrilSink;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::RcDom;
use tracing::debug;

use crate::{MarkupParser, ParseError};

/// A document tree produced by [`Html5everParser`].
pub struct HtmlDocument {
    dom: RcDom,
}

impl HtmlDocument {
    /// Number of recoverable errors html5ever reported while building the tree.
    pub fn error_count(&self) -> usize {
        self.dom.errors.borrow().len()
    }

    /// Consumes the wrapper and returns the underlying DOM.
    pub fn into_dom(self) -> RcDom {
        self.dom
    }
}

/// HTML parser implementation.
///
/// Defaults match html5ever's own: generic error strings, scripting enabled.
#[derive(Debug, Clone, Copy)]
pub struct Html5everParser {
    exact_errors: bool,
    scripting: bool,
}

impl Default for Html5everParser {
    fn default() -> Self {
        Self {
            exact_errors: false,
            scripting: true,
        }
    }
}

impl Html5everParser {
    /// Creates a new HTML parser with html5ever's default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report detailed error strings instead of html5ever's generic ones.
    pub fn with_exact_errors(mut self, exact_errors: bool) -> Self {
        self.exact_errors = exact_errors;
        self
    }

    /// Whether `<noscript>` content is treated as raw text (scripting on) or
    /// parsed as markup (scripting off).
    pub fn with_scripting(mut self, scripting: bool) -> Self {
        self.scripting = scripting;
        self
    }

    fn options(&self) -> ParseOpts {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: self.exact_errors,
                ..Default::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: self.exact_errors,
                scripting_enabled: self.scripting,
                ..Default::default()
            },
        }
    }
}

impl MarkupParser for Html5everParser {
    type Document = HtmlDocument;

    fn name(&self) -> &str {
        "html5ever"
    }

    fn parse(&self, mut reader: &mut dyn Read) -> Result<HtmlDocument, ParseError> {
        let dom = parse_document(RcDom::default(), self.options())
            .from_utf8()
            .read_from(&mut reader)?;

        let document = HtmlDocument { dom };
        debug!(
            parser = self.name(),
            recovered_errors = document.error_count(),
            "html5ever finished"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup5ever_rcdom::{Handle, NodeData};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }
    }

    fn collect_text(handle: &Handle, out: &mut String) {
        if let NodeData::Text { contents } = &handle.data {
            out.push_str(&contents.borrow());
        }
        for child in handle.children.borrow().iter() {
            collect_text(child, out);
        }
    }

    fn count_elements(handle: &Handle, local: &str) -> usize {
        let own = match &handle.data {
            NodeData::Element { name, .. } if &*name.local == local => 1,
            _ => 0,
        };
        own + handle
            .children
            .borrow()
            .iter()
            .map(|child| count_elements(child, local))
            .sum::<usize>()
    }

    #[rstest]
    #[case::container(
        r#"<html><body><div class="container"><p>Hello, World!</p></div></body></html>"#,
        "Hello, World!"
    )]
    #[case::greeting("<html><body><p>hello</p></body></html>", "hello")]
    fn test_parse_keeps_text(#[case] source: &str, #[case] expected: &str) {
        let parser = Html5everParser::new();

        let dom = parser.parse_str(source).unwrap().into_dom();

        let mut text = String::new();
        collect_text(&dom.document, &mut text);
        assert_eq!(text, expected);
        assert_eq!(count_elements(&dom.document, "p"), 1);
    }

    #[test]
    fn test_parse_empty_document() {
        let parser = Html5everParser::new();

        let dom = parser.parse_str("").unwrap().into_dom();

        // html5ever always synthesizes html, head and body.
        assert_eq!(count_elements(&dom.document, "html"), 1);
        assert_eq!(count_elements(&dom.document, "body"), 1);
    }

    #[test]
    fn test_parse_repairs_malformed_markup() {
        let parser = Html5everParser::new();

        let document = parser.parse_str("<div><p>unclosed<span></div>").unwrap();

        assert!(document.error_count() > 0);
        let dom = document.into_dom();
        assert_eq!(count_elements(&dom.document, "span"), 1);
    }

    #[test]
    fn test_parse_from_reader() {
        let parser = Html5everParser::new();
        let mut reader = io::Cursor::new(b"<p>from a cursor</p>".to_vec());

        let dom = parser.parse(&mut reader).unwrap().into_dom();

        let mut text = String::new();
        collect_text(&dom.document, &mut text);
        assert_eq!(text, "from a cursor");
    }

    #[test]
    fn test_reader_failure_is_reported() {
        let parser = Html5everParser::new();

        let result = parser.parse(&mut FailingReader);

        match result {
            Err(ParseError::Io(err)) => assert_eq!(err.to_string(), "stream closed"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a read failure"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let parser = Html5everParser::new();
        let mut reader: &[u8] = b"<p>caf\xff</p>";

        let dom = parser.parse(&mut reader).unwrap().into_dom();

        let mut text = String::new();
        collect_text(&dom.document, &mut text);
        assert_eq!(text, "caf\u{fffd}");
    }

    #[test]
    fn test_default_options_match_html5ever() {
        let ours = Html5everParser::new().options();
        let theirs = ParseOpts::default();

        assert_eq!(ours.tokenizer.exact_errors, theirs.tokenizer.exact_errors);
        assert_eq!(
            ours.tree_builder.scripting_enabled,
            theirs.tree_builder.scripting_enabled
        );
    }

    #[test]
    fn test_options_follow_builder() {
        let opts = Html5everParser::new()
            .with_exact_errors(true)
            .with_scripting(false)
            .options();

        assert!(opts.tokenizer.exact_errors);
        assert!(opts.tree_builder.exact_errors);
        assert!(!opts.tree_builder.scripting_enabled);
    }

    #[test]
    fn test_noscript_parsed_as_markup_without_scripting() {
        let source = "<html><head></head><body><noscript><p>off</p></noscript></body></html>";

        let scripted = Html5everParser::new().parse_str(source).unwrap().into_dom();
        let unscripted = Html5everParser::new()
            .with_scripting(false)
            .parse_str(source)
            .unwrap()
            .into_dom();

        assert_eq!(count_elements(&scripted.document, "p"), 0);
        assert_eq!(count_elements(&unscripted.document, "p"), 1);
    }

    #[test]
    fn test_name() {
        assert_eq!(Html5everParser::new().name(), "html5ever");
    }
}
