// Copyright 2026 the Emoji Attachment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emoji as inline text attachments.
//!
//! An [`EmojiAttachment`] carries a logical emoji name (e.g. a shortcode such
//! as `grinning_face`) and is embedded at a character position within styled
//! text. A host text engine accepts attachments through the [`InlineContent`]
//! trait and resolves names to concrete glyphs via an injected
//! [`EmojiSource`]; this crate never shapes, measures fonts, or draws.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//! - `shortcodes`: Enables `ShortcodeSource`, a resolver backed by the
//!   `emojis` crate's shortcode table.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod attached_text;
mod attachment;
mod content;
mod error;
mod shortcode;
mod source;

pub use crate::attached_text::AttachedText;
pub use crate::attachment::EmojiAttachment;
pub use crate::content::{GlyphContent, InlineContent, Size};
pub use crate::error::{CharSpan, Error, ErrorKind};
pub use crate::shortcode::{OBJECT_REPLACEMENT, ShortcodeToken, Shortcodes};
#[cfg(feature = "shortcodes")]
pub use crate::source::ShortcodeSource;
pub use crate::source::{EmojiSource, MapSource, ResolvedEmoji};
