//! Run command implementation

use htmlprobe_core::{FIXTURES, Fixture, Harness, MarkupParser};
use miette::{IntoDiagnostic, Result};
use tracing::debug;

/// Runs the named fixtures, every fixture with `all`, or the default one.
///
/// Names are resolved up front so a typo fails before anything is parsed.
///
/// # Panics
///
/// Panics with the parse failure's message at the first fixture the parser
/// rejects.
pub fn run_fixtures<P: MarkupParser>(
    harness: &Harness<P>,
    names: &[String],
    all: bool,
) -> Result<()> {
    let selected: Vec<Fixture> = if all {
        FIXTURES.to_vec()
    } else if names.is_empty() {
        vec![*Fixture::default_fixture()]
    } else {
        names
            .iter()
            .map(|name| Fixture::lookup(name).copied())
            .collect::<Result<_, _>>()
            .into_diagnostic()?
    };

    debug!(
        count = selected.len(),
        parser = harness.parser().name(),
        "Running fixtures"
    );
    if let Err(err) = harness.run_all(&selected) {
        panic!("{err}");
    }

    Ok(())
}
