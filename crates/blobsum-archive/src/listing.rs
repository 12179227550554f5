use std::io::Read;

use crate::format::Decoder;
use crate::{Error, Result};

/// A tar archive behind a single-member bzip2 decoder.
pub struct TarBz2Archive<R: Read> {
    archive: tar::Archive<Decoder<R>>,
}

impl<R: Read> TarBz2Archive<R> {
    pub fn new(reader: R) -> Self {
        Self {
            archive: tar::Archive::new(Decoder::new(reader)),
        }
    }

    /// Names of the non-directory entries, in archive order.
    ///
    /// The iterator is single-pass: entries are decoded as it advances, and
    /// listing again requires a fresh reader.
    pub fn entry_names(&mut self) -> Result<EntryNames<'_, R>> {
        let entries = self.archive.entries().map_err(Error::decoding)?;
        Ok(EntryNames {
            entries,
            done: false,
        })
    }
}

pub struct EntryNames<'a, R: 'a + Read> {
    entries: tar::Entries<'a, Decoder<R>>,
    done:    bool,
}

impl<'a, R: Read + 'a> Iterator for EntryNames<'a, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::decoding(e)));
                }
            };

            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            if entry.header().entry_type().is_dir() || name.ends_with('/') {
                continue;
            }
            return Some(Ok(name));
        }
        None
    }
}

/// Collect the listing of a tar.bz2 stream.
pub fn list_entries<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut archive = TarBz2Archive::new(reader);
    archive.entry_names()?.collect()
}

/// Render names the way reference listings store them: one per line, each
/// terminated by `\n`.
pub fn listing_text<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().fold(String::new(), |mut text, name| {
        text.push_str(name.as_ref());
        text.push('\n');
        text
    })
}
