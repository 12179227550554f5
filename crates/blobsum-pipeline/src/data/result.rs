use std::fmt;

use blobsum_store::BlobRef;
use blobsum_verify::Digest;

/// Outcome of one verification, published once and never rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationResult {
    pub subject:        String,
    pub checksum_match: bool,
    /// Present only when a listing comparison was requested.
    pub listing_match:  Option<bool>,
}

impl VerificationResult {
    pub fn is_valid(&self) -> bool { self.checksum_match && self.listing_match.unwrap_or(true) }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum validation result: {}", self.checksum_match)?;
        if let Some(listing) = self.listing_match {
            write!(f, "\nFile listing validation result: {listing}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct VerificationReport {
    pub result:      VerificationResult,
    pub result_blob: BlobRef,
    pub digest:      Digest,
}

#[derive(Clone, Debug)]
pub struct UploadReport {
    pub destination:   BlobRef,
    pub checksum_blob: BlobRef,
    pub digest:        Digest,
    pub bytes:         u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_only_renders_one_line() {
        let result = VerificationResult {
            subject:        "x".into(),
            checksum_match: true,
            listing_match:  None,
        };
        assert_eq!(result.to_string(), "Checksum validation result: true");
        assert!(result.is_valid());
    }

    #[test]
    fn listing_adds_a_line() {
        let result = VerificationResult {
            subject:        "x".into(),
            checksum_match: true,
            listing_match:  Some(false),
        };
        assert_eq!(
            result.to_string(),
            "Checksum validation result: true\nFile listing validation result: false"
        );
        assert!(!result.is_valid());
    }
}
