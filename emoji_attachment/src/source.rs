// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use hashbrown::HashMap;

use crate::{GlyphContent, Size};

/// The glyph and metrics an [`EmojiSource`] produced for a name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEmoji {
    /// What the renderer should draw for this emoji.
    pub content: GlyphContent,
    /// The space the content occupies inline.
    pub size: Size,
}

/// Maps emoji names to renderable content and metrics.
///
/// Resolution is a capability injected by the host: this crate ships no
/// default policy for which names exist or how large their glyphs are.
/// Unknown names resolve to `None`; what happens then (a placeholder glyph,
/// the raw token text) is decided by the renderer.
pub trait EmojiSource {
    /// Resolves `name` to content and size, or `None` if the name is unknown.
    fn resolve(&self, name: &str) -> Option<ResolvedEmoji>;

    /// Returns `true` if `name` would resolve.
    fn is_known(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// An [`EmojiSource`] backed by an in-memory table.
///
/// Suitable for custom emoji sets where each name is paired with uploaded
/// image data, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, ResolvedEmoji>,
}

impl MapSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, resolved: ResolvedEmoji) {
        self.entries.insert(name.into(), resolved);
    }

    /// Removes the entry for `name`, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<ResolvedEmoji> {
        self.entries.remove(name)
    }

    /// The number of names this source can resolve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this source resolves no names at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EmojiSource for MapSource {
    fn resolve(&self, name: &str) -> Option<ResolvedEmoji> {
        self.entries.get(name).cloned()
    }
}

/// An [`EmojiSource`] backed by the `emojis` crate's shortcode table.
///
/// Resolves names like `grinning_face` to their Unicode sequences, which the
/// renderer draws with the surrounding font stack. All glyphs report the
/// uniform size chosen at construction, since the Unicode table carries no
/// metrics of its own.
#[cfg(feature = "shortcodes")]
#[cfg_attr(docsrs, doc(cfg(feature = "shortcodes")))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortcodeSource {
    glyph_size: Size,
}

#[cfg(feature = "shortcodes")]
impl ShortcodeSource {
    /// Creates a source whose glyphs all occupy `glyph_size`.
    #[must_use]
    pub const fn new(glyph_size: Size) -> Self {
        Self { glyph_size }
    }
}

#[cfg(feature = "shortcodes")]
impl EmojiSource for ShortcodeSource {
    fn resolve(&self, name: &str) -> Option<ResolvedEmoji> {
        let emoji = emojis::get_by_shortcode(name)?;
        Some(ResolvedEmoji {
            content: GlyphContent::Codepoints(alloc::borrow::Cow::Borrowed(emoji.as_str())),
            size: self.glyph_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{EmojiSource, MapSource, ResolvedEmoji};
    use crate::{GlyphContent, Size};
    use alloc::borrow::Cow;
    use alloc::sync::Arc;

    fn png_stub() -> ResolvedEmoji {
        ResolvedEmoji {
            content: GlyphContent::Image(Arc::from(&b"\x89PNG"[..])),
            size: Size::new(32.0, 32.0),
        }
    }

    #[test]
    fn map_source_resolves_inserted_names() {
        let mut source = MapSource::new();
        assert!(source.is_empty());
        source.insert("party_blob", png_stub());
        assert_eq!(source.len(), 1);
        assert!(source.is_known("party_blob"));
        assert_eq!(source.resolve("party_blob"), Some(png_stub()));
        assert_eq!(source.resolve("other"), None);
    }

    #[test]
    fn map_source_insert_replaces_and_remove_clears() {
        let mut source = MapSource::new();
        source.insert("party_blob", png_stub());
        let replacement = ResolvedEmoji {
            content: GlyphContent::Codepoints(Cow::Borrowed("\u{1F389}")),
            size: Size::new(16.0, 16.0),
        };
        source.insert("party_blob", replacement.clone());
        assert_eq!(source.resolve("party_blob"), Some(replacement));
        assert!(source.remove("party_blob").is_some());
        assert!(!source.is_known("party_blob"));
    }

    #[cfg(feature = "shortcodes")]
    #[test]
    fn shortcode_source_resolves_known_shortcodes() {
        use super::ShortcodeSource;

        let source = ShortcodeSource::new(Size::new(16.0, 16.0));
        let resolved = source.resolve("grinning").expect("known shortcode");
        assert_eq!(
            resolved.content,
            GlyphContent::Codepoints(Cow::Borrowed("\u{1F600}")),
        );
        assert_eq!(resolved.size, Size::new(16.0, 16.0));
        assert_eq!(source.resolve("definitely_not_real"), None);
    }
}
