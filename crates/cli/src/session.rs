//! Terminal front end: an interactive loop and one-shot execution.
//!
//! Both print command feedback followed by the numbered list of displayed records, which is
//! what the index arguments of `edit`, `delete` and `view` refer to.

use medbook_core::{AddressBookStorage, CommandResult, LogicManager};
use std::io::{BufRead, Write};

/// Reads commands line by line until `exit` or end of input.
///
/// Command failures are printed and the loop carries on.
pub fn run_repl<S, R, W>(
    logic: &mut LogicManager<S>,
    mut input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    S: AddressBookStorage,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to MedBook! Type `help` to see every command.")?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        match logic.execute(text) {
            Ok(result) => {
                render(logic, &result, &mut output)?;
                if result.exit {
                    break;
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "command failed");
                writeln!(output, "{err}")?;
            }
        }
    }

    Ok(())
}

/// Runs one command. A failing command, or one whose change could not be saved, is returned
/// as an error after its output is written.
pub fn run_once<S, W>(
    logic: &mut LogicManager<S>,
    text: &str,
    output: &mut W,
) -> anyhow::Result<()>
where
    S: AddressBookStorage,
    W: Write,
{
    let result = logic.execute(text)?;
    render(logic, &result, output)?;
    match result.save_error {
        Some(err) => anyhow::bail!("the change was applied but not saved: {err}"),
        None => Ok(()),
    }
}

fn render<S, W>(
    logic: &LogicManager<S>,
    result: &CommandResult,
    output: &mut W,
) -> anyhow::Result<()>
where
    S: AddressBookStorage,
    W: Write,
{
    writeln!(output, "{}", result.feedback)?;
    if let Some(err) = &result.save_error {
        writeln!(output, "Warning: the change was applied but could not be saved ({err})")?;
    }
    if result.show_help || result.exit {
        return Ok(());
    }

    for (i, record) in logic.displayed_records().iter().enumerate() {
        writeln!(output, "{:>3}. [{}] {}", i + 1, record.kind(), record)?;
    }
    Ok(())
}
