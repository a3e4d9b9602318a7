use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Colorize, Styler},
    QueueableCommand,
};
use number_prefix::NumberPrefix;
use std::{fmt::Display, io::Write};

use dockrun::{Mismatch, ParseError, RunCommand};

/// Memory is stored in megabytes; show it with a binary prefix as well.
fn human_memory(megabytes: u64) -> String {
    match NumberPrefix::binary(megabytes as f64 * 1024.0 * 1024.0) {
        NumberPrefix::Standalone(bytes) => format!("{} bytes", bytes),
        NumberPrefix::Prefixed(prefix, n) => format!("{:.1} {}B", n, prefix),
    }
}

pub fn report(stdout: &mut impl Write, command: &RunCommand) -> Result<()> {
    let lines = command.report();
    let longest_label = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, value) in lines {
        let value = match (label, command.memory) {
            ("Memory", Some(megabytes)) => format!("{} ({})", value, human_memory(megabytes)),
            _ => value,
        };

        stdout
            .queue(style::PrintStyledContent(label.cyan().bold()))?
            .queue(cursor::MoveRight((longest_label - label.len() + 1) as u16))?
            .queue(style::Print(format!(":  {}\n", value)))?;
    }

    stdout.flush()?;
    Ok(())
}

pub fn pass(stdout: &mut impl Write) -> Result<()> {
    stdout
        .queue(style::PrintStyledContent("PASS".green().bold()))?
        .queue(style::Print("\n"))?
        .flush()?;
    Ok(())
}

pub fn fail(stdout: &mut impl Write, mismatch: &Mismatch) -> Result<()> {
    labelled(stdout, "FAIL: ", mismatch)
}

pub fn error(stdout: &mut impl Write, err: &ParseError) -> Result<()> {
    labelled(stdout, "ERROR: ", err)
}

fn labelled(stdout: &mut impl Write, label: &'static str, message: &impl Display) -> Result<()> {
    stdout
        .queue(style::PrintStyledContent(label.red().bold()))?
        .queue(style::Print(format!("{}\n", message)))?
        .flush()?;
    Ok(())
}

pub type TaskVerdict = (String, Option<String>, Result<(), ParseError>);

/// One line per task with its verdict in an aligned column, followed by the
/// task description when there is one.
pub fn task_lines(stdout: &mut impl Write, tasks: &[TaskVerdict]) -> Result<()> {
    let longest_name = tasks
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, description, verdict) in tasks {
        stdout.queue(style::Print(name))?;

        let padding = longest_name - name.len() + 1;
        stdout.queue(cursor::MoveRight(padding as u16))?;

        match verdict {
            Ok(()) => stdout.queue(style::PrintStyledContent("ok".green().bold()))?,
            Err(err) => stdout
                .queue(style::PrintStyledContent("invalid: ".red().bold()))?
                .queue(style::Print(err))?,
        };
        if let Some(description) = description {
            stdout.queue(style::Print(format!("  ({})", description)))?;
        }
        stdout.queue(style::Print("\n"))?;
    }

    stdout.flush()?;
    Ok(())
}
