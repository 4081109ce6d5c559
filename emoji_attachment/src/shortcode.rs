// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizing `:name:` emoji tokens in source text.
//!
//! Scanning is purely lexical: every well-formed token is reported, whether
//! or not any [`EmojiSource`] can resolve its name. Resolution happens later,
//! on the rendering side.
//!
//! [`EmojiSource`]: crate::EmojiSource

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{AttachedText, EmojiAttachment};

/// The placeholder character an attachment occupies in attached text.
///
/// This is U+FFFC OBJECT REPLACEMENT CHARACTER, the conventional stand-in for
/// out-of-band content embedded in a character stream.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// A `:name:` token found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeToken<'a> {
    /// The byte range of the whole token, colons included.
    pub range: Range<usize>,
    /// The name between the colons.
    pub name: &'a str,
}

/// An iterator over the `:name:` tokens in a string.
///
/// A token is a non-empty run of ASCII alphanumerics, `_`, `-`, or `+`
/// between two colons. A colon that fails to close a token may still open
/// the next one, so `::wave:` yields `wave`. Tokens never overlap.
#[derive(Debug, Clone)]
pub struct Shortcodes<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Shortcodes<'a> {
    /// Creates a scanner over `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b'+')
}

impl<'a> Iterator for Shortcodes<'a> {
    type Item = ShortcodeToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        loop {
            let open = self.pos + bytes[self.pos..].iter().position(|&b| b == b':')?;
            let mut cursor = open + 1;
            while cursor < bytes.len() && is_name_byte(bytes[cursor]) {
                cursor += 1;
            }
            if cursor > open + 1 && cursor < bytes.len() && bytes[cursor] == b':' {
                let token = ShortcodeToken {
                    range: open..cursor + 1,
                    // Colons and name bytes are ASCII, so these indices lie
                    // on character boundaries.
                    name: &self.text[open + 1..cursor],
                };
                self.pos = cursor + 1;
                return Some(token);
            }
            if cursor >= bytes.len() {
                self.pos = bytes.len();
                return None;
            }
            // The byte that broke the name may open the next token.
            self.pos = if bytes[cursor] == b':' { cursor } else { cursor + 1 };
        }
    }
}

impl AttachedText<String> {
    /// Builds attached text from source text containing `:name:` tokens.
    ///
    /// Each token is replaced with [`OBJECT_REPLACEMENT`] and a named
    /// [`EmojiAttachment`] is embedded at the placeholder's position. Names
    /// are not checked against any source; an unresolvable attachment is the
    /// renderer's fallback case, same as one inserted by hand.
    #[must_use]
    pub fn from_shortcodes(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut attachments = Vec::new();
        let mut copied = 0;
        for token in Shortcodes::new(source) {
            text.push_str(&source[copied..token.range.start]);
            attachments.push((text.len(), EmojiAttachment::named(token.name)));
            text.push(OBJECT_REPLACEMENT);
            copied = token.range.end;
        }
        text.push_str(&source[copied..]);
        Self::from_parts(text, attachments)
    }
}
