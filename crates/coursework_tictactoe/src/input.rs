//! Parsing of console move lines and yes/no answers.

use std::num::IntErrorKind;
use tracing::instrument;

/// Malformed move syntax. Recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveParseError {
    /// No comma between row and column.
    #[display("Expected row,col")]
    MissingComma,

    /// More than one comma.
    #[display("Expected exactly two numbers")]
    TooManyParts,

    /// A part that is not an integer.
    #[display("{:?} is not a whole number", _0)]
    NotAnInteger(String),
}

impl std::error::Error for MoveParseError {}

/// Parses `"row,col"` into a coordinate pair.
///
/// Whitespace around either number is ignored and signs are accepted:
/// `" -1 , 2 "` parses, and the board rejects it later. Integers too
/// large for `i32` saturate, so they are also refused as off the board
/// rather than as malformed input.
#[instrument]
pub fn parse_move(line: &str) -> Result<(i32, i32), MoveParseError> {
    let mut parts = line.split(',');
    let row = parts.next().unwrap_or_default();
    let col = parts.next().ok_or(MoveParseError::MissingComma)?;
    if parts.next().is_some() {
        return Err(MoveParseError::TooManyParts);
    }
    Ok((parse_int(row)?, parse_int(col)?))
}

fn parse_int(part: &str) -> Result<i32, MoveParseError> {
    let trimmed = part.trim();
    match trimmed.parse::<i32>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(MoveParseError::NotAnInteger(trimmed.to_string())),
        },
    }
}

/// Interprets an answer to "play again?".
///
/// `Some(true)` for y/yes, `Some(false)` for n/no, `None` for anything
/// else so the caller can ask again.
#[instrument]
pub fn parse_play_again(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_pair() {
        assert_eq!(parse_move("1,2"), Ok((1, 2)));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_move(" 0 ,  2\n"), Ok((0, 2)));
        assert_eq!(parse_move("2, 1"), Ok((2, 1)));
    }

    #[test]
    fn test_parse_accepts_negative_and_large() {
        assert_eq!(parse_move("-1,0"), Ok((-1, 0)));
        assert_eq!(parse_move("7,9"), Ok((7, 9)));
    }

    #[test]
    fn test_parse_saturates_overflowing_integers() {
        assert_eq!(parse_move("99999999999,0"), Ok((i32::MAX, 0)));
        assert_eq!(parse_move("1, -99999999999999999999999"), Ok((1, i32::MIN)));
    }

    #[test]
    fn test_parse_rejects_missing_comma() {
        assert_eq!(parse_move("1 2"), Err(MoveParseError::MissingComma));
        assert_eq!(parse_move(""), Err(MoveParseError::MissingComma));
    }

    #[test]
    fn test_parse_rejects_extra_parts() {
        assert_eq!(parse_move("1,2,3"), Err(MoveParseError::TooManyParts));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!(
            parse_move("a,1"),
            Err(MoveParseError::NotAnInteger("a".to_string()))
        );
        assert_eq!(
            parse_move("1,"),
            Err(MoveParseError::NotAnInteger(String::new()))
        );
        assert!(parse_move("1.5,2").is_err());
    }

    #[test]
    fn test_play_again_answers() {
        assert_eq!(parse_play_again("y"), Some(true));
        assert_eq!(parse_play_again(" YES "), Some(true));
        assert_eq!(parse_play_again("n"), Some(false));
        assert_eq!(parse_play_again("No"), Some(false));
        assert_eq!(parse_play_again("maybe"), None);
        assert_eq!(parse_play_again(""), None);
    }
}
