/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::convert::TryFrom;
use std::io::BufRead;
use thiserror::Error;

/// Whitespace separated tokens, pulled one line at a time so that callers
/// can interleave prompts with reads.
pub struct Scanner<R>
{
    read: R,
    tokens: std::vec::IntoIter<String>,
}

impl<R> Scanner<R>
    where R: BufRead
{
    pub fn new(read: R) -> Self
    {
        Self
        {
            read,
            tokens: Vec::new().into_iter(),
        }
    }

    pub fn next_token(&mut self) -> Result<Option<String>, ReadInputError>
    {
        loop
        {
            if let Some(token) = self.tokens.next() {
                return Ok(Some(token)); }

            let mut buf = vec![];

            if self.read.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None); }

            let line = match String::from_utf8(buf)
            {
                Ok(line) => line,
                Err(e) => return Err(ReadInputError::InvalidEncoding {
                    line: String::from_utf8_lossy(e.as_bytes()).trim().to_string() }),
            };

            self.tokens = line
                .split_whitespace()
                .map(String::from)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

#[derive(Error, Debug)]
pub enum ReadInputError
{
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("`{token}` is not an integer")]
    ParseInt
    {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line `{line}` is not valid UTF-8")]
    InvalidEncoding
    {
        line: String,
    },

    #[error("negative size {0}")]
    NegativeSize(i64),

    #[error("missing size")]
    MissingSize,

    #[error("expected {expected} integer(s), input ended after {found}")]
    MissingElements
    {
        expected: usize,
        found: usize,
    },
}

impl ReadInputError
{
    pub fn is_invalid_input(&self) -> bool
    {
        match self
        {
            ReadInputError::Io(_) => false,
            _ => true,
        }
    }
}

impl From<ReadInputError> for std::io::Error
{
    fn from(e: ReadInputError) -> std::io::Error
    {
        match e
        {
            ReadInputError::Io(e) => e,
            e => std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
        }
    }
}

fn parse_token<T>(token: String) -> Result<T, ReadInputError>
    where T: std::str::FromStr<Err = std::num::ParseIntError>
{
    match token.parse()
    {
        Ok(value) => Ok(value),
        Err(source) => Err(ReadInputError::ParseInt { token, source }),
    }
}

pub fn read_size<R>(scanner: &mut Scanner<R>) -> Result<usize, ReadInputError>
    where R: BufRead
{
    let size: i64 = match scanner.next_token()?
    {
        None => return Err(ReadInputError::MissingSize),
        Some(token) => parse_token(token)?,
    };

    if size < 0 {
        return Err(ReadInputError::NegativeSize(size)); }

    // a size past usize::MAX can never be satisfied, read_sequence reports the shortfall
    Ok(usize::try_from(size).unwrap_or(usize::MAX))
}

pub fn read_sequence<R>(scanner: &mut Scanner<R>, len: usize) -> Result<Vec<i32>, ReadInputError>
    where R: BufRead
{
    // the declared size is untrusted, so only grow as elements arrive
    let mut result = Vec::with_capacity(len.min(1024));

    while result.len() < len
    {
        match scanner.next_token()?
        {
            None => return Err(ReadInputError::MissingElements { expected: len, found: result.len() }),
            Some(token) => result.push(parse_token(token)?),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn scanner(text: &str) -> Scanner<&[u8]>
    {
        Scanner::new(text.as_bytes())
    }

    #[test]
    fn tokens_span_lines()
    {
        let mut scanner = scanner("  1 2\n\n3\t4  \n");
        let mut tokens = vec![];

        while let Some(token) = scanner.next_token().unwrap() {
            tokens.push(token); }

        assert_eq!(tokens, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn reads_size_then_elements()
    {
        let mut scanner = scanner("3\n5 -2\n7 99");

        let len = read_size(&mut scanner).unwrap();
        assert_eq!(len, 3);
        assert_eq!(read_sequence(&mut scanner, len).unwrap(), vec![5, -2, 7]);

        // leftover tokens stay available
        assert_eq!(scanner.next_token().unwrap(), Some("99".to_string()));
    }

    #[test]
    fn zero_size_reads_nothing()
    {
        let mut scanner = scanner("0");

        let len = read_size(&mut scanner).unwrap();
        assert_eq!(read_sequence(&mut scanner, len).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn negative_size_is_rejected()
    {
        let err = read_size(&mut scanner("-4 1 2")).unwrap_err();

        assert!(matches!(err, ReadInputError::NegativeSize(-4)));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn missing_size_is_rejected()
    {
        let err = read_size(&mut scanner("   \n")).unwrap_err();

        assert!(matches!(err, ReadInputError::MissingSize));
    }

    #[test]
    fn short_input_is_rejected()
    {
        let err = read_sequence(&mut scanner("1 2"), 4).unwrap_err();

        assert!(matches!(err, ReadInputError::MissingElements { expected: 4, found: 2 }));
        assert_eq!(err.to_string(), "expected 4 integer(s), input ended after 2");
    }

    #[test]
    fn non_integer_is_rejected()
    {
        let err = read_sequence(&mut scanner("1 x 3"), 3).unwrap_err();

        match &err
        {
            ReadInputError::ParseInt { token, .. } => assert_eq!(token, "x"),
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(read_size(&mut scanner("2.5")).is_err());
        assert!(read_sequence(&mut scanner("99999999999"), 1).is_err());
    }

    #[test]
    fn non_utf8_line_is_invalid_input()
    {
        let mut scanner = Scanner::new(&b"2 \xff\xfe 3\n"[..]);
        let err = read_size(&mut scanner).unwrap_err();

        match &err
        {
            ReadInputError::InvalidEncoding { line } => assert_eq!(line, "2 \u{FFFD}\u{FFFD} 3"),
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(err.is_invalid_input());

        let err: std::io::Error = err.into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn non_utf8_after_valid_lines()
    {
        let mut scanner = Scanner::new(&b"2\n5 \xc3\n"[..]);

        let len = read_size(&mut scanner).unwrap();
        let err = read_sequence(&mut scanner, len).unwrap_err();

        assert!(matches!(err, ReadInputError::InvalidEncoding { .. }));
    }

    #[test]
    fn huge_size_reports_missing_elements()
    {
        let mut scanner = scanner("9223372036854775807 1 2");

        let len = read_size(&mut scanner).unwrap();
        let err = read_sequence(&mut scanner, len).unwrap_err();

        assert!(matches!(err, ReadInputError::MissingElements { found: 2, .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn invalid_input_maps_to_io_kind()
    {
        let err: std::io::Error = ReadInputError::NegativeSize(-1).into();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);

        let err: std::io::Error = ReadInputError::Io(std::io::ErrorKind::BrokenPipe.into()).into();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
