// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error type for attachment placement.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending byte index, the
/// text length at the time of failure, and, for boundary errors, the
/// enclosing UTF-8 character span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The byte index the caller tried to place an attachment at.
    index: usize,

    /// The length in bytes of the text at the time of failure.
    len: usize,

    /// The enclosing character span, for boundary-related errors.
    char_span: Option<CharSpan>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte index provided by the caller.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length in bytes of the text at the time of the error.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The enclosing UTF-8 character span, for boundary-related errors.
    pub fn char_span(&self) -> Option<CharSpan> {
        self.char_span
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::OutOfBounds,
            index,
            len,
            char_span: None,
        }
    }

    pub(crate) fn not_on_char_boundary(text: &str, index: usize) -> Self {
        let (start, end) = enclosing_char_span(text, index).unwrap_or((index, index));
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            index,
            len: text.len(),
            char_span: Some(CharSpan { start, end }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::OutOfBounds => write!(
                f,
                "index {} out of bounds for len {}",
                self.index, self.len
            ),
            ErrorKind::NotOnCharBoundary => {
                if let Some(span) = self.char_span {
                    write!(
                        f,
                        "index {} not on UTF-8 boundary (char {}..{})",
                        self.index, span.start, span.end
                    )
                } else {
                    write!(f, "index {} not on UTF-8 boundary", self.index)
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided index was past the end of the text.
    OutOfBounds,

    /// The provided index was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// The UTF-8 codepoint span enclosing an offending index.
///
/// Returned by [`Error::char_span`] when the error kind is
/// [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CharSpan {
    /// The start byte index of the enclosing UTF-8 codepoint.
    pub start: usize,

    /// The end byte index (exclusive) of the enclosing UTF-8 codepoint.
    pub end: usize,
}

fn enclosing_char_span(text: &str, index: usize) -> Option<(usize, usize)> {
    let len = text.len();
    if index > len {
        return None;
    }
    if text.is_char_boundary(index) {
        return Some((index, index));
    }

    // Previous boundary (max 3 bytes back). Index 0 is always a boundary, so
    // this cannot underflow before finding one.
    let mut start = index;
    while !text.is_char_boundary(start) {
        start -= 1;
    }

    // Next boundary (max 3 bytes forward).
    let mut end = index;
    while end < len && !text.is_char_boundary(end) {
        end += 1;
    }

    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::enclosing_char_span;

    #[test]
    fn char_span_of_multibyte_interior() {
        // "é" is 2 bytes; index 1 falls inside it.
        assert_eq!(enclosing_char_span("éclair", 1), Some((0, 2)));
        // Four-byte emoji; every interior index maps to the same span.
        let s = "\u{1F600}!";
        for index in 1..4 {
            assert_eq!(enclosing_char_span(s, index), Some((0, 4)));
        }
    }

    #[test]
    fn char_span_on_boundary_is_empty() {
        assert_eq!(enclosing_char_span("abc", 2), Some((2, 2)));
        assert_eq!(enclosing_char_span("abc", 9), None);
    }
}
