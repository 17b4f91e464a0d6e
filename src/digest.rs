//! Text digest used as the only source of pattern and color entropy.

use sha1::{Digest as _, Sha1};

/// Length in bytes of a [`Digest`].
pub const DIGEST_LEN: usize = 20;

/// Number of leading digest bytes used for the derived foreground color.
pub const COLOR_BYTES: usize = 3;

/// A SHA-1 digest of lower-cased input text.
///
/// SHA-1 is used for stable, well-distributed output, not as a security
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Hashes `text` after lower-casing it. No other normalization is done,
    /// so surrounding whitespace changes the result.
    pub fn from_text(text: &str) -> Self {
        let hash = Sha1::digest(text.to_lowercase().as_bytes());
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The RGB triple the default foreground color is made from.
    pub fn color_bytes(&self) -> [u8; COLOR_BYTES] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Bytes 3..20, consumed row-major by the block pattern.
    pub fn pattern_bytes(&self) -> &[u8] {
        &self.0[COLOR_BYTES..]
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(d: &Digest) -> String {
        d.as_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn known_sha1_values() {
        assert_eq!(
            hex(&Digest::from_text("")),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            hex(&Digest::from_text("sometext")),
            "d22a158c8ead99dbd7eddb86104496f3ee087049"
        );
    }

    #[test]
    fn lowercases_before_hashing() {
        assert_eq!(Digest::from_text("SomeText"), Digest::from_text("sometext"));
        assert_eq!(Digest::from_text("ALICE"), Digest::from_text("alice"));
    }

    #[test]
    fn whitespace_is_significant() {
        assert_ne!(Digest::from_text(" alice"), Digest::from_text("alice"));
    }

    #[test]
    fn byte_slices() {
        let digest = Digest::from_text("sometext");
        assert_eq!(digest.color_bytes(), [0xd2, 0x2a, 0x15]);
        assert_eq!(digest.pattern_bytes().len(), 17);
        assert_eq!(digest.pattern_bytes()[0], 0x8c);
    }
}
