//! Interactive prompts
//!
//! Generic over the reader/writer so the CLI flow can be driven from tests.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use anyhow::{bail, Context, Result};

/// Print `message`, then read one line with surrounding whitespace removed.
/// End of input reads as an empty line.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    Ok(line.trim().to_string())
}

/// Ask for the squad size; a blank answer selects `default`
pub fn read_player_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: i64,
) -> Result<i64> {
    let answer = prompt_line(
        input,
        output,
        &format!("Enter number of players (default {}): ", default),
    )?;
    parse_player_count(&answer, default)
}

/// Any integer is accepted, it is only cross-checked against the formation.
/// Integers beyond `i64` saturate, since they can never match anyway.
pub fn parse_player_count(answer: &str, default: i64) -> Result<i64> {
    if answer.is_empty() {
        return Ok(default);
    }
    match answer.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => bail!("Invalid player count: {:?}", answer),
        },
    }
}

pub fn read_formation<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    prompt_line(input, output, "Enter formation (e.g., 4-3-3): ")
}
