//! The demonstration harness.

use htmlprobe_parser::MarkupParser;
use tracing::debug;

use crate::{Fixture, ProbeError};

/// Feeds fixtures to a markup parser.
///
/// The harness only looks at whether the parser failed. Whatever document
/// the parser returns is dropped without being inspected.
pub struct Harness<P> {
    parser: P,
}

impl<P: MarkupParser> Harness<P> {
    /// Creates a harness around `parser`.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Returns the wrapped parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Parses one fixture and discards the result.
    pub fn run(&self, fixture: &Fixture) -> Result<(), ProbeError> {
        debug!(
            fixture = fixture.name,
            parser = self.parser.name(),
            "Parsing fixture"
        );

        let document = self
            .parser
            .parse_str(fixture.source)
            .map_err(|source| ProbeError::parse(fixture.name, source))?;
        drop(document);

        debug!(fixture = fixture.name, "Fixture parsed");
        Ok(())
    }

    /// Parses each fixture in order, stopping at the first failure.
    pub fn run_all(&self, fixtures: &[Fixture]) -> Result<(), ProbeError> {
        fixtures.iter().try_for_each(|fixture| self.run(fixture))
    }

    /// Parses one fixture and panics if the parser reports an error.
    ///
    /// # Panics
    ///
    /// Panics with the parse failure's message. This is the harness's only
    /// failure path: the failure is never retried or recovered.
    pub fn run_or_abort(&self, fixture: &Fixture) {
        if let Err(err) = self.run(fixture) {
            panic!("{err}");
        }
    }
}
