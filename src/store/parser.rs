use std::borrow::Cow;

use thiserror::Error;

/// One decoded line of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub done: bool,
    /// Content bytes as stored; not necessarily UTF-8.
    pub content: Vec<u8>,
}

impl Record {
    /// Content for display, with invalid UTF-8 replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// A line whose leading token is not a `0`/`1` completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: expected completion flag `0` or `1`, found `{token}`")]
pub struct RecordError {
    /// 1-based line number in the file.
    pub line: usize,
    pub token: String,
}

/// Result of parsing a whole store file.
#[derive(Debug, Default)]
pub struct ParsedStore {
    pub records: Vec<Record>,
    pub errors: Vec<RecordError>,
}

pub struct RecordParser;

impl RecordParser {
    /// Parse every line of `input`.
    ///
    /// Malformed lines are collected in `errors` and skipped; blank lines are
    /// ignored. Neither stops the remaining lines from loading.
    pub fn parse(input: &[u8]) -> ParsedStore {
        let mut parsed = ParsedStore::default();
        let input = input.strip_suffix(b"\n").unwrap_or(input);
        if input.is_empty() {
            return parsed;
        }

        for (idx, line) in input.split(|&b| b == b'\n').enumerate() {
            match Self::parse_line(line) {
                Ok(Some(record)) => parsed.records.push(record),
                Ok(None) => {}
                Err(token) => parsed.errors.push(RecordError {
                    line: idx + 1,
                    token,
                }),
            }
        }

        parsed
    }

    /// Decode `<flag> <content>`. Returns the offending token on failure.
    fn parse_line(line: &[u8]) -> Result<Option<Record>, String> {
        let line = line.trim_ascii_start();
        if line.trim_ascii_end().is_empty() {
            return Ok(None);
        }

        let split = line
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(line.len());
        let (token, rest) = line.split_at(split);

        let done = match token {
            b"0" => false,
            b"1" => true,
            other => return Err(String::from_utf8_lossy(other).into_owned()),
        };

        Ok(Some(Record {
            done,
            content: rest.trim_ascii_start().to_vec(),
        }))
    }
}
