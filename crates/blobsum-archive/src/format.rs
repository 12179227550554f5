use std::io::{self, Read};

/// Decoder for the compressed tar stream.
///
/// Only the first bzip2 member is decoded; concatenated members after it are
/// ignored, matching how the reference listings were produced.
pub struct Decoder<R>(bzip2::read::BzDecoder<R>);

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self { Self(bzip2::read::BzDecoder::new(reader)) }

    pub fn into_inner(self) -> R { self.0.into_inner() }
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.0.read(buf) }
}
