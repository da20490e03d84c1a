//! Reading the input value from standard input.
//!
//! The contract is scanner-like: exactly one whitespace-delimited token is
//! consumed and anything after it is ignored. `n` is a `u64`, so negative
//! input fails here, at the boundary, instead of reaching the strategies.

use std::io::Read;

use crate::error::{SumError, SumResult};

/// Read the first whitespace-delimited token from `reader` and parse it
/// as a non-negative integer.
///
/// Returns [`SumError::EmptyInput`] when the stream holds no token, and
/// [`SumError::InputFormat`] when the token does not parse as a `u64`
/// (non-numeric, negative, or past `u64::MAX`).
pub fn read_count<R: Read>(mut reader: R) -> SumResult<u64> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_count(&buf)
}

/// Parse the first whitespace-delimited token of `input` as a `u64`.
pub fn parse_count(input: &str) -> SumResult<u64> {
    let token = input.split_whitespace().next().ok_or(SumError::EmptyInput)?;
    token.parse().map_err(|source| SumError::InputFormat {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_integer() {
        assert_eq!(parse_count("5").unwrap(), 5);
        assert_eq!(parse_count("0").unwrap(), 0);
    }

    #[test]
    fn test_skips_surrounding_whitespace() {
        assert_eq!(parse_count("  42\n").unwrap(), 42);
        assert_eq!(parse_count("\t7 ").unwrap(), 7);
    }

    #[test]
    fn test_first_token_wins() {
        // Scanner semantics: one token consumed, the rest ignored.
        assert_eq!(parse_count("7 ignored trailing").unwrap(), 7);
        assert_eq!(parse_count("12\n34").unwrap(), 12);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_count(""), Err(SumError::EmptyInput)));
        assert!(matches!(parse_count("  \n\t"), Err(SumError::EmptyInput)));
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        match parse_count("abc") {
            Err(SumError::InputFormat { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("expected InputFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(
            parse_count("-3"),
            Err(SumError::InputFormat { .. })
        ));
    }

    #[test]
    fn test_rejects_value_past_u64_max() {
        // u64::MAX + 1
        assert!(matches!(
            parse_count("18446744073709551616"),
            Err(SumError::InputFormat { .. })
        ));
    }

    #[test]
    fn test_reads_from_reader() {
        assert_eq!(read_count("100\n".as_bytes()).unwrap(), 100);
    }
}
