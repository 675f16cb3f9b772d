//! Compiled-in markup fixtures.
//!
//! Each fixture is an independent scan target; they are never merged.

use crate::ProbeError;

/// A named, literal markup document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Name used on the command line.
    pub name: &'static str,
    /// One-line description for `list`.
    pub description: &'static str,
    /// The literal markup.
    pub source: &'static str,
}

/// A paragraph nested in a classed container div.
pub const CONTAINER: Fixture = Fixture {
    name: "container",
    description: "Paragraph inside a div with a class attribute",
    source: r#"<html><body><div class="container"><p>Hello, World!</p></div></body></html>"#,
};

/// A bare paragraph in the body.
pub const GREETING: Fixture = Fixture {
    name: "greeting",
    description: "Single paragraph directly in the body",
    source: "<html><body><p>hello</p></body></html>",
};

/// Every registered fixture, default first.
pub const FIXTURES: &[Fixture] = &[CONTAINER, GREETING];

impl Fixture {
    /// The fixture run when none is named.
    pub fn default_fixture() -> &'static Fixture {
        &FIXTURES[0]
    }

    /// Finds a fixture by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Fixture> {
        FIXTURES
            .iter()
            .find(|fixture| fixture.name.eq_ignore_ascii_case(name))
    }

    /// Like [`Fixture::find`], but an unknown name is an error.
    pub fn lookup(name: &str) -> Result<&'static Fixture, ProbeError> {
        Self::find(name).ok_or_else(|| ProbeError::unknown_fixture(name))
    }
}
