//! `scrubchain apply`: runs one chain over loose values.

use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

use scrubchain_core::{ChainSource, FilterEngine, FilterInvocation, Value};

/// Filters each of `values`, or each line of `reader` when `values` is empty,
/// writing one result per line.
pub fn run_apply<R: BufRead, W: Write>(
    chain: &str,
    values: &[String],
    reader: R,
    writer: &mut W,
) -> Result<()> {
    let invocations = ChainSource::from(chain).into_invocations();
    debug!("Applying chain of {} filter(s).", invocations.len());
    let engine = FilterEngine::new();

    if values.is_empty() {
        for line in reader.lines() {
            let line = line.context("Failed to read from stdin")?;
            apply_one(&engine, &invocations, &line, writer)?;
        }
    } else {
        for value in values {
            apply_one(&engine, &invocations, value, writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn apply_one<W: Write>(
    engine: &FilterEngine,
    invocations: &[FilterInvocation],
    value: &str,
    writer: &mut W,
) -> Result<()> {
    let filtered = engine.apply_chain(&Value::from(value), invocations)?;
    writeln!(writer, "{}", filtered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(chain: &str, values: &[&str], stdin: &str) -> Result<String> {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut out = Vec::new();
        run_apply(chain, &values, Cursor::new(stdin.to_string()), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn applies_to_arguments() {
        assert_eq!(run("trim|upper", &[" a ", "b "], "").unwrap(), "A\nB\n");
    }

    #[test]
    fn reads_lines_when_no_arguments() {
        assert_eq!(
            run("slug", &[], "Hello World\nÅsa Öberg\n").unwrap(),
            "hello-world\nasa-oberg\n"
        );
    }

    #[test]
    fn unknown_filter_fails() {
        let err = run("nope", &["x"], "").unwrap_err();
        assert_eq!(err.to_string(), "'nope' is not a valid filter.");
    }
}
