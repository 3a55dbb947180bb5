use std::fmt;

use crate::field::{FIELD_AES, GaloisField};

/// Length in bytes of the all-zero tag prefix shared alongside the secret
/// when tagging is enabled. This value will never change.
pub const TAG_LENGTH: usize = 8;

/// Configuration for [`split`](super::split) and [`combine`](super::combine).
///
/// The same field must be used on both sides. The tag flag should match as
/// well: combining tagged shares without `tag` returns the secret behind an
/// 8-byte zero prefix, and combining untagged shares with `tag` treats the
/// first 8 secret bytes as a tag.
#[derive(Clone, Copy)]
pub struct Options<'f> {
    /// Field the polynomials are evaluated and interpolated in.
    pub field: &'f dyn GaloisField,

    /// Whether a [`TAG_LENGTH`]-byte zero prefix is shared alongside the
    /// secret and verified on combine.
    pub tag: bool,
}

impl Options<'static> {
    /// AES field, no tagging.
    pub fn new() -> Self {
        Self {
            field: &FIELD_AES,
            tag: false,
        }
    }
}

impl<'f> Options<'f> {
    /// Replaces the field, keeping the tag flag.
    pub fn with_field<'g>(self, field: &'g dyn GaloisField) -> Options<'g> {
        Options {
            field,
            tag: self.tag,
        }
    }

    /// Enables or disables tagging.
    pub fn with_tag(mut self, tag: bool) -> Self {
        self.tag = tag;
        self
    }

    /// Number of tag bytes prepended to every share under these options.
    #[inline]
    pub fn tag_len(&self) -> usize {
        if self.tag { TAG_LENGTH } else { 0 }
    }
}

impl Default for Options<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}
