// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::sync::Arc;

use crate::{EmojiAttachment, EmojiSource};

/// The space an inline attachment occupies in a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// The width in pixels.
    pub width: f32,
    /// The height in pixels.
    pub height: f32,
}

impl Size {
    /// Creates a size from a width and height in pixels.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Visual content resolved for an inline attachment.
///
/// The renderer decides how to draw each variant; this crate only transports
/// the resolved data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlyphContent {
    /// A Unicode emoji sequence, rendered with the surrounding font stack.
    Codepoints(Cow<'static, str>),
    /// Encoded raster image data, decoded and drawn by the renderer.
    Image(Arc<[u8]>),
}

/// Content an inline attachment contributes to a text layout.
///
/// This is the interface a host text engine accepts from an attachment:
/// something that can provide visual content and the layout size that content
/// occupies. Both capabilities take the resolver as a parameter so that
/// name-to-glyph mapping and metrics stay a caller-supplied policy.
///
/// Returning `None` from either method means the attachment cannot currently
/// be resolved; the host's fallback path (a placeholder glyph, the raw source
/// token) takes over from there.
pub trait InlineContent {
    /// The visual content for this attachment, resolved through `source`.
    fn visual_content(&self, source: &dyn EmojiSource) -> Option<GlyphContent>;

    /// The layout size this attachment occupies, resolved through `source`.
    fn layout_size(&self, source: &dyn EmojiSource) -> Option<Size>;
}

impl InlineContent for EmojiAttachment {
    fn visual_content(&self, source: &dyn EmojiSource) -> Option<GlyphContent> {
        source.resolve(self.name()?).map(|resolved| resolved.content)
    }

    fn layout_size(&self, source: &dyn EmojiSource) -> Option<Size> {
        source.resolve(self.name()?).map(|resolved| resolved.size)
    }
}

#[cfg(test)]
mod tests {
    use super::{GlyphContent, InlineContent, Size};
    use crate::{EmojiAttachment, MapSource, ResolvedEmoji};
    use alloc::borrow::Cow;

    fn source_with_grin() -> MapSource {
        let mut source = MapSource::new();
        source.insert(
            "grinning_face",
            ResolvedEmoji {
                content: GlyphContent::Codepoints(Cow::Borrowed("\u{1F600}")),
                size: Size::new(16.0, 16.0),
            },
        );
        source
    }

    #[test]
    fn named_attachment_resolves_content_and_size() {
        let attachment = EmojiAttachment::named("grinning_face");
        let source = source_with_grin();
        assert_eq!(
            attachment.visual_content(&source),
            Some(GlyphContent::Codepoints(Cow::Borrowed("\u{1F600}"))),
        );
        assert_eq!(attachment.layout_size(&source), Some(Size::new(16.0, 16.0)));
    }

    #[test]
    fn unnamed_attachment_resolves_to_none() {
        let attachment = EmojiAttachment::new();
        let source = source_with_grin();
        assert_eq!(attachment.visual_content(&source), None);
        assert_eq!(attachment.layout_size(&source), None);
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let attachment = EmojiAttachment::named("not_an_emoji");
        let source = source_with_grin();
        assert_eq!(attachment.visual_content(&source), None);
        assert_eq!(attachment.layout_size(&source), None);
    }
}
