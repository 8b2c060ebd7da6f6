//! Formation string parsing
//!
//! A formation such as `4-3-3` lists how many outfield players stand on each
//! tactical line, from the defending goal towards the attacking goal. The
//! goalkeeper is implicit and never part of the string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormationError;

/// Default separator between line sizes
pub const DEFAULT_DELIMITER: char = '-';

/// Largest line size the parser accepts. Bigger values are integers but
/// would ask the layout for billions of points.
pub const MAX_LINE_PLAYERS: u32 = 1_000;

/// Ordered line sizes, defenders first
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formation {
    lines: Vec<u32>,
}

impl Formation {
    pub fn new(lines: Vec<u32>) -> Self {
        Self { lines }
    }

    /// Formation with no tactical lines (only the goalkeeper is placed)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Players on the tactical lines, goalkeeper excluded
    pub fn outfield_players(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, &n| acc.saturating_add(u64::from(n)))
    }

    /// Outfield players plus the goalkeeper
    pub fn total_players(&self) -> u64 {
        self.outfield_players().saturating_add(1)
    }

    pub fn into_lines(self) -> Vec<u32> {
        self.lines
    }
}

impl From<Vec<u32>> for Formation {
    fn from(lines: Vec<u32>) -> Self {
        Self::new(lines)
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, n) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DEFAULT_DELIMITER)?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl FromStr for Formation {
    type Err = FormationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormationParser::default().try_parse(s)
    }
}

/// Splits formation text on a configurable delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationParser {
    delimiter: char,
}

impl Default for FormationParser {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl FormationParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Strict parse: every token must be a non-negative integer.
    ///
    /// Empty tokens (from `4--3` or a trailing `4-3-`) are rejected, as are
    /// lines above [`MAX_LINE_PLAYERS`].
    pub fn try_parse(&self, text: &str) -> Result<Formation, FormationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FormationError::Empty);
        }

        text.split(self.delimiter)
            .enumerate()
            .map(|(line, token)| {
                let players = token
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| FormationError::InvalidToken {
                        token: token.to_string(),
                        line,
                    })?;
                if players > MAX_LINE_PLAYERS {
                    return Err(FormationError::LineTooLarge {
                        players,
                        line,
                        max: MAX_LINE_PLAYERS,
                    });
                }
                Ok(players)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Formation::new)
    }

    /// Lenient parse: malformed input is reported and yields an empty formation.
    pub fn parse(&self, text: &str) -> Formation {
        match self.try_parse(text) {
            Ok(formation) => formation,
            Err(e) => {
                log::warn!(
                    "Invalid formation format ({}). Use format like '4{d}3{d}3'.",
                    e,
                    d = self.delimiter
                );
                Formation::empty()
            }
        }
    }
}

/// Parse `4-3-3` style text, returning an empty formation on malformed input
pub fn parse_formation(text: &str) -> Formation {
    FormationParser::default().parse(text)
}

/// Parse `4-3-3` style text, reporting the first bad token
pub fn try_parse_formation(text: &str) -> Result<Formation, FormationError> {
    FormationParser::default().try_parse(text)
}
