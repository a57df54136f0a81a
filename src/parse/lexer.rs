//! line oriented lexing shared by the case, geometry, and variable grammars
//!
//! All three file kinds are read one line at a time. Most of the grammar only cares about
//! "data lines": lines that are not blank and do not start with `#`. Description lines are
//! the exception, they are free-form and read verbatim with [`LineReader::read_line`].
//!
//! Several records allow optional leading integers in front of the payload (time set and
//! file set numbers in the case file, element ids in the geometry file). Those are resolved
//! with [`try_parse_variants`], which tries an ordered list of field layouts and accepts the
//! first one the line satisfies.

use super::error::{self, LineError, Location};
use std::io::BufRead;

/// A single line of an input file, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    pub(crate) fn new(number: usize, text: String) -> Self {
        Self { number, text }
    }

    /// position of this line in the file, starting at 1
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> std::str::SplitAsciiWhitespace<'_> {
        self.text.split_ascii_whitespace()
    }

    pub fn first_token(&self) -> Option<&str> {
        self.tokens().next()
    }

    /// the `n`th whitespace separated token (0 based)
    pub fn token(&self, n: usize) -> Option<&str> {
        self.tokens().nth(n)
    }

    /// keyword check that ignores indentation
    pub fn starts_with(&self, keyword: &str) -> bool {
        self.text.trim_start().starts_with(keyword)
    }

    /// blank lines and `#` comments carry no data
    pub fn is_data(&self) -> bool {
        match self.first_token() {
            Some(token) => !token.starts_with('#'),
            None => false,
        }
    }
}

/// Reads lines from a text file while keeping track of where in the file it is
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
    file: String,
    line_number: usize,
    peeked: Option<Line>,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new<T: Into<String>>(inner: R, file: T) -> Self {
        Self {
            inner,
            file: file.into(),
            line_number: 0,
            peeked: None,
            buffer: Vec::new(),
        }
    }

    /// name of the file being read, used in error messages
    pub fn file(&self) -> &str {
        &self.file
    }

    /// location of the most recently read line
    pub fn location(&self) -> Location {
        Location::new(self.file.clone(), self.line_number)
    }

    /// Read the next line verbatim, even if it is blank. Returns `None` at the end of the file.
    pub fn read_line<E: LineError>(&mut self) -> Result<Option<Line>, E> {
        if let Some(line) = self.peeked.take() {
            return Ok(Some(line));
        }

        self.buffer.clear();
        let read = self
            .inner
            .read_until(b'\n', &mut self.buffer)
            .map_err(|err| error::Io::new(self.file.clone(), err))?;

        if read == 0 {
            return Ok(None);
        }

        self.line_number += 1;

        while matches!(self.buffer.last(), Some(b'\n') | Some(b'\r')) {
            self.buffer.pop();
        }

        let text = std::str::from_utf8(&self.buffer)
            .map_err(|_| error::UnsupportedEncoding::new(self.file.clone()))?;

        Ok(Some(Line::new(self.line_number, text.to_string())))
    }

    /// Read the next line holding data, skipping blank lines and comments
    pub fn next_data_line<E: LineError>(&mut self) -> Result<Option<Line>, E> {
        if let Some(line) = self.peeked.take() {
            return Ok(Some(line));
        }

        while let Some(line) = self.read_line::<E>()? {
            if line.is_data() {
                return Ok(Some(line));
            }
        }

        Ok(None)
    }

    /// Look at the next data line without consuming it
    pub fn peek_data_line<E: LineError>(&mut self) -> Result<Option<&Line>, E> {
        if self.peeked.is_none() {
            self.peeked = self.next_data_line::<E>()?;
        }

        Ok(self.peeked.as_ref())
    }

    /// Like [`next_data_line`](Self::next_data_line), but the end of the file is an error.
    /// `expected` describes the missing record in the error message.
    pub fn expect_data_line<E: LineError>(&mut self, expected: &str) -> Result<Line, E> {
        match self.next_data_line::<E>()? {
            Some(line) => Ok(line),
            None => Err(error::TruncatedInput::new(self.location(), expected.to_string()).into()),
        }
    }

    /// error for a line that does not fit the record being read
    pub(crate) fn malformed(&self, line: &Line, expected: &str) -> error::MalformedRecord {
        error::MalformedRecord::new(
            Location::new(self.file.clone(), line.number()),
            expected.to_string(),
            line.text().trim().to_string(),
        )
    }

    pub(crate) fn location_of(&self, line: &Line) -> Location {
        Location::new(self.file.clone(), line.number())
    }
}

/// One slot of a field layout tried by [`try_parse_variants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// any token, discarded
    Word,
    /// an integer token, discarded
    Int,
    /// any token, returned to the caller
    Capture,
    /// an integer token, returned to the caller
    CaptureInt,
}

impl Field {
    fn accepts(&self, token: &str) -> bool {
        match self {
            Self::Word | Self::Capture => true,
            Self::Int | Self::CaptureInt => token.parse::<i64>().is_ok(),
        }
    }

    fn is_captured(&self) -> bool {
        matches!(self, Self::Capture | Self::CaptureInt)
    }
}

/// The outcome of a successful [`try_parse_variants`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<'a> {
    /// index of the layout that matched
    pub variant: usize,
    /// captured tokens, in layout order
    pub captures: Vec<&'a str>,
}

/// Try each field layout in order, returning the first one the line satisfies.
///
/// A layout matches when the line has at least as many tokens as the layout has fields
/// and every integer field lines up with an integer token. Tokens past the end of the
/// layout are ignored. Layouts should be ordered from the most specific (most leading
/// integers) to the least specific.
pub fn try_parse_variants<'a>(line: &'a Line, variants: &[&[Field]]) -> Option<Matched<'a>> {
    let tokens: Vec<&str> = line.tokens().collect();

    variants.iter().enumerate().find_map(|(variant, fields)| {
        if tokens.len() < fields.len() {
            return None;
        }

        let mut captures = Vec::new();
        for (field, token) in fields.iter().zip(tokens.iter()) {
            if !field.accepts(token) {
                return None;
            }
            if field.is_captured() {
                captures.push(*token);
            }
        }

        Some(Matched { variant, captures })
    })
}
