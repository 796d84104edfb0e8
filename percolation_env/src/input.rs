//! Reading the grid size and trial count from an input stream.

use crate::EnvError;
use std::io::Read;

/// Reads two whitespace-separated integers, grid size N then trial count T.
///
/// Only the syntax is checked here; positivity is the caller's concern.
/// Anything after the second integer is ignored.
pub fn read_dimensions<R: Read>(mut reader: R) -> Result<(i64, i64), EnvError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    let mut tokens = input.split_whitespace();
    let grid_size = next_int(&mut tokens, "grid size")?;
    let trials = next_int(&mut tokens, "trial count")?;
    Ok((grid_size, trials))
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<i64, EnvError> {
    let token = tokens.next().ok_or(EnvError::MissingValue(name))?;
    token.parse().map_err(|_| EnvError::parse(name, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_two_values() {
        let (n, t) = read_dimensions("200 100\n".as_bytes()).unwrap();
        assert_eq!((n, t), (200, 100));
    }

    #[test]
    fn test_values_on_separate_lines() {
        let (n, t) = read_dimensions("  20\n\n\t30 trailing".as_bytes()).unwrap();
        assert_eq!((n, t), (20, 30));
    }

    #[test]
    fn test_negative_values_pass_through() {
        let (n, t) = read_dimensions("-5 0".as_bytes()).unwrap();
        assert_eq!((n, t), (-5, 0));
    }

    #[test]
    fn test_missing_trials() {
        let err = read_dimensions("10".as_bytes()).unwrap_err();
        assert!(matches!(err, EnvError::MissingValue("trial count")));
    }

    #[test]
    fn test_unparseable_value() {
        let err = read_dimensions("ten 5".as_bytes()).unwrap_err();
        assert!(matches!(err, EnvError::Parse { name: "grid size", .. }));
    }
}
