//! Parsing of player input lines.

use derive_more::Display;
use tracing::instrument;

/// What a player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A raw `(row, col)` pair, not yet bounds-checked.
    Move(i32, i32),
    /// Leave the session.
    Quit,
}

/// Unreadable input line.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("no move entered")]
    Empty,
    /// Not exactly two values.
    #[display("expected a row and a column, got {_0} value(s)")]
    WrongArity(usize),
    /// A value was not an integer.
    #[display("'{_0}' is not a number")]
    NotANumber(String),
}

impl std::error::Error for InputError {}

/// Parses `row col`, `row,col`, or a quit word.
///
/// Coordinates are passed through as signed integers; bounds are the engine's
/// concern.
#[instrument]
pub fn parse_entry(line: &str) -> Result<Entry, InputError> {
    let trimmed = line.trim();
    if matches!(trimmed.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(Entry::Quit);
    }
    let (row, col) = parse_move(trimmed)?;
    Ok(Entry::Move(row, col))
}

/// Parses a `row,col` or `row col` pair.
#[instrument]
pub fn parse_move(text: &str) -> Result<(i32, i32), InputError> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => Err(InputError::Empty),
        [row, col] => Ok((number(row)?, number(col)?)),
        other => Err(InputError::WrongArity(other.len())),
    }
}

fn number(part: &str) -> Result<i32, InputError> {
    part.parse()
        .map_err(|_| InputError::NotANumber(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_move("1 2"), Ok((1, 2)));
        assert_eq!(parse_move("1,2"), Ok((1, 2)));
        assert_eq!(parse_move(" 0 , 2 "), Ok((0, 2)));
    }

    #[test]
    fn test_negative_values_reach_engine() {
        assert_eq!(parse_move("-1,3"), Ok((-1, 3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_move("   "), Err(InputError::Empty));
        assert_eq!(parse_move("1"), Err(InputError::WrongArity(1)));
        assert_eq!(parse_move("1 2 3"), Err(InputError::WrongArity(3)));
        assert_eq!(parse_move("a,1"), Err(InputError::NotANumber("a".to_string())));
    }

    #[test]
    fn test_quit_words() {
        for word in ["q", "quit", "EXIT"] {
            assert_eq!(parse_entry(word), Ok(Entry::Quit));
        }
        assert_eq!(parse_entry("2 2"), Ok(Entry::Move(2, 2)));
    }
}
