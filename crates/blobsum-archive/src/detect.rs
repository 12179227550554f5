/// bzip2 stream header: `BZh` followed by a block size digit `1`-`9`.
pub fn is_bzip2(data: &[u8]) -> bool {
    matches!(data, [b'B', b'Z', b'h', b'1'..=b'9', ..])
}
