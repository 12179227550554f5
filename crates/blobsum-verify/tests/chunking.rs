use blobsum_verify::{DEFAULT_CHUNK_SIZE, Sha1Hasher, hash_async_reader, hash_reader};
use proptest::prelude::*;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) ^ (i >> 8)) as u8).collect()
}

#[test]
fn chunked_digest_matches_one_shot() {
    let data = sample(DEFAULT_CHUNK_SIZE + 12_345);
    let expected = Sha1Hasher::digest(&data);

    for chunk in [1, 4 * 1024, DEFAULT_CHUNK_SIZE, data.len() + 1] {
        assert_eq!(
            hash_reader(&data[..], chunk).unwrap(),
            expected,
            "chunk size {chunk}"
        );
    }
}

#[tokio::test]
async fn async_chunked_digest_matches_one_shot() {
    let data = sample(64 * 1024 + 3);
    let expected = Sha1Hasher::digest(&data);

    for chunk in [1, 4 * 1024, DEFAULT_CHUNK_SIZE, data.len() + 1] {
        assert_eq!(hash_async_reader(&data[..], chunk).await.unwrap(), expected);
    }
}

proptest! {
    #[test]
    fn any_chunk_size_gives_same_digest(
        data in proptest::collection::vec(any::<u8>(), 0..8192),
        chunk in 1usize..10_000,
    ) {
        prop_assert_eq!(hash_reader(&data[..], chunk).unwrap(), Sha1Hasher::digest(&data));
    }
}
