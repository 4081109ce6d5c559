// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// An inline text attachment identified by an emoji name.
///
/// The attachment itself is a plain data holder: it stores which emoji it
/// represents and nothing else. Mapping the name to a concrete glyph or image
/// and laying it out inline is the job of the host text engine, reached
/// through [`InlineContent`] and an injected [`EmojiSource`].
///
/// A freshly constructed attachment has no name. Rendering an unnamed
/// attachment is left to the host's fallback path; it is not an error here.
///
/// [`InlineContent`]: crate::InlineContent
/// [`EmojiSource`]: crate::EmojiSource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiAttachment {
    /// The emoji name, e.g. a shortcode such as `grinning_face`.
    name: Option<String>,
}

impl EmojiAttachment {
    /// Creates an attachment with no name set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attachment with `name` already set.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Stores `name` as this attachment's identifier.
    ///
    /// No validation is performed; any string is accepted, including the
    /// empty string. Setting a name a second time overwrites the first.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// The currently stored name, or `None` if never set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Removes and returns the stored name, leaving the attachment unnamed.
    pub fn take_name(&mut self) -> Option<String> {
        self.name.take()
    }
}

#[cfg(test)]
mod tests {
    use super::EmojiAttachment;
    use alloc::string::String;

    #[test]
    fn fresh_attachment_has_no_name() {
        let attachment = EmojiAttachment::new();
        assert_eq!(attachment.name(), None, "name should be absent until set");
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut attachment = EmojiAttachment::new();
        attachment.set_name("grinning_face");
        assert_eq!(attachment.name(), Some("grinning_face"));
    }

    #[test]
    fn second_set_overwrites_first() {
        let mut attachment = EmojiAttachment::new();
        attachment.set_name("a");
        attachment.set_name("b");
        assert_eq!(attachment.name(), Some("b"), "last write should win");
    }

    #[test]
    fn empty_name_is_accepted() {
        let mut attachment = EmojiAttachment::new();
        attachment.set_name("");
        assert_eq!(attachment.name(), Some(""));
    }

    #[test]
    fn named_constructor_sets_name() {
        let attachment = EmojiAttachment::named(String::from("thumbsup"));
        assert_eq!(attachment.name(), Some("thumbsup"));
    }

    #[test]
    fn take_name_leaves_attachment_unnamed() {
        let mut attachment = EmojiAttachment::named("wave");
        assert_eq!(attachment.take_name().as_deref(), Some("wave"));
        assert_eq!(attachment.name(), None, "name should be gone after take");
    }
}
