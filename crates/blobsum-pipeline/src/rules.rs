//! Naming and comparison rules shared by the pipelines.

use blobsum_store::BlobRef;
use blobsum_verify::Digest;
use uuid::Uuid;

/// Suffix of the checksum sidecar written next to every upload.
pub const CHECKSUM_SUFFIX: &str = ".sha1";

/// Name of the blob a verification result is published to.
///
/// The leading id keeps concurrent verifications of the same subject from
/// colliding.
pub fn result_blob_name(id: Uuid, subject: &str) -> String { format!("{id}_{subject}_result.txt") }

/// Result blob for `target`, in the target's container.
pub fn result_blob(target: &BlobRef, id: Uuid) -> BlobRef {
    target.with_name(result_blob_name(id, target.name()))
}

/// Sidecar blob holding the checksum of `blob`.
pub fn checksum_blob(blob: &BlobRef) -> BlobRef { blob.sibling(CHECKSUM_SUFFIX) }

/// Checksums compare as hex text without regard to case.
pub fn checksum_matches(actual: &Digest, expected: &str) -> bool { actual.matches_hex(expected) }

/// Listings compare exactly, including case and whitespace.
pub fn listing_matches(actual: &str, expected: &str) -> bool { actual == expected }

#[cfg(test)]
mod tests {
    use super::*;
    use blobsum_verify::Sha1Hasher;

    #[test]
    fn result_name_embeds_id_and_subject() {
        let id = Uuid::nil();
        assert_eq!(
            result_blob_name(id, "bundle.tar.bz2"),
            "00000000-0000-0000-0000-000000000000_bundle.tar.bz2_result.txt"
        );

        let target = BlobRef::new("archives", "bundle.tar.bz2");
        let result = result_blob(&target, id);
        assert_eq!(result.container(), "archives");
        assert!(result.name().ends_with("_bundle.tar.bz2_result.txt"));
    }

    #[test]
    fn distinct_ids_give_distinct_names() {
        assert_ne!(
            result_blob_name(Uuid::new_v4(), "x"),
            result_blob_name(Uuid::new_v4(), "x")
        );
    }

    #[test]
    fn checksum_comparison_ignores_case_only() {
        let digest = Sha1Hasher::digest(b"AAAA");
        assert!(checksum_matches(&digest, &digest.to_hex().to_uppercase()));
        assert!(!checksum_matches(&digest, &Sha1Hasher::digest(b"BBBB").to_hex()));
        assert!(!checksum_matches(&digest, &format!("{digest}\n")));
    }

    #[test]
    fn listing_comparison_is_exact() {
        assert!(listing_matches("a.txt\nb.txt\n", "a.txt\nb.txt\n"));
        assert!(!listing_matches("a.txt\nb.txt\n", "A.txt\nb.txt\n"));
        assert!(!listing_matches("a.txt\nb.txt\n", "a.txt\nb.txt"));
        assert!(!listing_matches("a.txt\nb.txt\n", "a.txt\nc.txt\n"));
    }

    #[test]
    fn sidecar_sits_next_to_blob() {
        let sidecar = checksum_blob(&BlobRef::new("c", "dir/file.bin"));
        assert_eq!(sidecar, BlobRef::new("c", "dir/file.bin.sha1"));
    }
}
