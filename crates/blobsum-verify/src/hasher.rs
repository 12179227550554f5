use sha1::Digest as _;

use crate::Digest;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Digest;
}

#[derive(Clone, Default)]
pub struct Sha1Hasher(sha1::Sha1);

impl Sha1Hasher {
    pub fn new() -> Self { Self(sha1::Sha1::new()) }

    pub fn digest(data: &[u8]) -> Digest { to_digest(&sha1::Sha1::digest(data)) }
}

impl Hasher for Sha1Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }

    fn finalize(self) -> Digest { to_digest(&self.0.finalize()) }
}

fn to_digest(output: &[u8]) -> Digest {
    let mut bytes = [0u8; Digest::LEN];
    bytes.copy_from_slice(output);
    Digest::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_hasher() {
        let mut hasher = Sha1Hasher::new();
        hasher.update(b"hello ");
        hasher.update(b"world");

        assert_eq!(
            hasher.finalize().to_hex(),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            Sha1Hasher::new().finalize().to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }
}
