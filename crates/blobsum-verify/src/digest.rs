use std::fmt;

use crate::{Result, VerificationError};

const SHA1_LEN: usize = 20;

/// A finalized SHA-1 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; SHA1_LEN]);

impl Digest {
    pub const LEN: usize = SHA1_LEN;

    pub fn new(bytes: [u8; Self::LEN]) -> Self { Self(bytes) }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] { &self.0 }

    /// Lowercase hex, the sidecar format.
    pub fn to_hex(&self) -> String { hex::encode(self.0) }

    pub fn from_hex(text: &str) -> Result<Self> {
        let mut bytes = [0u8; Self::LEN];
        hex::decode_to_slice(text, &mut bytes)
            .map_err(|_| VerificationError::InvalidHex(text.to_string()))?;
        Ok(Self(bytes))
    }

    /// Compares against hex text ignoring ASCII case.
    ///
    /// The text is not trimmed: a reference with trailing whitespace or a
    /// filename column does not match.
    pub fn matches_hex(&self, text: &str) -> bool { self.to_hex().eq_ignore_ascii_case(text) }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] { &self.0 }
}
