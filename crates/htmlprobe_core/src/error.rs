//! Harness error types.

use htmlprobe_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while probing the parser.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The parser rejected a fixture.
    #[error("Parse failure in fixture '{fixture}': {source}")]
    Parse {
        /// Name of the fixture being parsed.
        fixture: String,
        /// The parser's own error.
        #[source]
        source: ParseError,
    },

    /// No fixture is registered under the requested name.
    #[error("Unknown fixture '{0}'")]
    UnknownFixture(String),
}

impl ProbeError {
    /// Creates a parse failure for the named fixture.
    pub fn parse(fixture: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            fixture: fixture.into(),
            source,
        }
    }

    /// Creates an unknown fixture error.
    pub fn unknown_fixture(name: impl Into<String>) -> Self {
        Self::UnknownFixture(name.into())
    }
}
