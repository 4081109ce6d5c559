// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::{EmojiAttachment, Error};

/// A block of text with emoji attachments embedded at byte positions.
///
/// Each attachment sits at a single byte offset into the text, which must lie
/// on a UTF-8 character boundary; offsets are validated when the attachment
/// is inserted. The container owns its attachments for its whole lifetime.
///
/// The container does not lay anything out. A host text engine walks
/// [`attachments_iter`] and resolves each attachment through its own
/// [`EmojiSource`] when building a layout.
///
/// [`attachments_iter`]: Self::attachments_iter
/// [`EmojiSource`]: crate::EmojiSource
#[derive(Debug, Clone)]
pub struct AttachedText<T: AsRef<str>> {
    text: T,
    attachments: Vec<(usize, EmojiAttachment)>,
}

impl<T: AsRef<str>> AttachedText<T> {
    /// Creates an `AttachedText` with no attachments.
    pub fn new(text: T) -> Self {
        Self {
            text,
            attachments: Vec::default(),
        }
    }

    /// Builds a container from offsets already known to be valid.
    pub(crate) fn from_parts(text: T, attachments: Vec<(usize, EmojiAttachment)>) -> Self {
        debug_assert!(
            attachments
                .iter()
                .all(|(index, _)| text.as_ref().is_char_boundary(*index)),
            "attachment offsets must lie on character boundaries"
        );
        Self { text, attachments }
    }

    /// Borrows the underlying text value.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrows the underlying text as `&str`.
    pub fn as_str(&self) -> &str {
        self.text.as_ref()
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Embeds `attachment` at byte offset `index` within the text.
    ///
    /// `index` may equal the text length, placing the attachment after the
    /// final character. Errors if `index` is past the end of the text or not
    /// on a UTF-8 character boundary.
    pub fn insert_attachment(
        &mut self,
        index: usize,
        attachment: EmojiAttachment,
    ) -> Result<(), Error> {
        let text = self.as_str();
        if index > text.len() {
            return Err(Error::out_of_bounds(index, text.len()));
        }
        if !text.is_char_boundary(index) {
            return Err(Error::not_on_char_boundary(text, index));
        }
        self.attachments.push((index, attachment));
        Ok(())
    }

    /// Iterates over all attachments and the byte offsets they sit at.
    ///
    /// Attachments are yielded in the order they were inserted.
    pub fn attachments_iter(&self) -> impl ExactSizeIterator<Item = (usize, &EmojiAttachment)> {
        self.attachments.iter().map(|(index, a)| (*index, a))
    }

    /// Iterates over the attachments embedded at the given byte offset.
    pub fn attachments_at(&self, index: usize) -> impl Iterator<Item = &EmojiAttachment> {
        self.attachments.iter().filter_map(move |(at, attachment)| {
            if *at == index { Some(attachment) } else { None }
        })
    }

    /// Returns the number of embedded attachments.
    pub fn attachments_len(&self) -> usize {
        self.attachments.len()
    }

    /// Removes all embedded attachments.
    pub fn clear_attachments(&mut self) {
        self.attachments.clear();
    }
}
