use std::fs::File;
use std::io::{self, Write};

use blobsum_archive::{Error, TarBz2Archive, is_bzip2, list_entries, listing_text};

enum Item<'a> {
    Dir(&'a str),
    File(&'a str, &'a [u8]),
}

fn tar_bytes(items: &[Item<'_>]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for item in items {
        let mut header = tar::Header::new_gnu();
        match item {
            Item::Dir(path) => {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_mode(0o755);
                header.set_size(0);
                builder.append_data(&mut header, path, io::empty()).unwrap();
            }
            Item::File(path, data) => {
                header.set_entry_type(tar::EntryType::Regular);
                header.set_mode(0o644);
                header.set_size(data.len() as u64);
                builder.append_data(&mut header, path, *data).unwrap();
            }
        }
    }
    builder.into_inner().unwrap()
}

fn bzip2(data: &[u8]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::best());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn tar_bz2(items: &[Item<'_>]) -> Vec<u8> { bzip2(&tar_bytes(items)) }

#[test]
fn directories_are_skipped_in_archive_order() {
    let archive = tar_bz2(&[
        Item::Dir("d1/"),
        Item::File("d1/f1", b"one"),
        Item::File("f2", b"two"),
    ]);

    assert!(is_bzip2(&archive));
    assert_eq!(list_entries(&archive[..]).unwrap(), ["d1/f1", "f2"]);
}

#[test]
fn order_is_archive_order_not_sorted() {
    let archive = tar_bz2(&[
        Item::File("zeta.txt", b"z"),
        Item::File("alpha.txt", b"a"),
        Item::File("mid/beta.txt", b"b"),
    ]);

    assert_eq!(
        list_entries(&archive[..]).unwrap(),
        ["zeta.txt", "alpha.txt", "mid/beta.txt"]
    );
}

#[test]
fn long_names_are_preserved() {
    let long = format!("{}/payload.bin", "nested".repeat(30));
    let archive = tar_bz2(&[Item::File(&long, b"x")]);

    assert_eq!(list_entries(&archive[..]).unwrap(), [long]);
}

#[test]
fn empty_archive_lists_nothing() {
    let archive = tar_bz2(&[]);
    assert!(list_entries(&archive[..]).unwrap().is_empty());
}

#[test]
fn entry_names_are_lazy_and_single_pass() {
    let archive = tar_bz2(&[Item::File("a.txt", b"a"), Item::File("b.txt", b"b")]);
    let mut tar = TarBz2Archive::new(&archive[..]);

    let mut names = tar.entry_names().unwrap();
    assert_eq!(names.next().unwrap().unwrap(), "a.txt");
    assert_eq!(names.next().unwrap().unwrap(), "b.txt");
    assert!(names.next().is_none());
}

#[test]
fn uncompressed_tar_is_rejected() {
    let plain = tar_bytes(&[Item::File("a.txt", b"a")]);
    let err = list_entries(&plain[..]).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "got {err:?}");
}

#[test]
fn bzip2_of_non_tar_is_rejected() {
    let junk = bzip2(&[0xAB; 2048]);
    let err = list_entries(&junk[..]).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "got {err:?}");
}

#[test]
fn listing_matches_reference_text() {
    let archive = tar_bz2(&[Item::File("a.txt", b"a"), Item::File("b.txt", b"b")]);
    let names = list_entries(&archive[..]).unwrap();

    assert_eq!(listing_text(&names), "a.txt\nb.txt\n");
    assert_ne!(listing_text(&names), "a.txt\nc.txt\n");
}

#[test]
fn lists_from_file_on_disk() {
    let dir = tempfile::Builder::new()
        .prefix("blobsum-test-tar-")
        .tempdir()
        .unwrap();
    let path = dir.path().join("bundle.tar.bz2");
    std::fs::write(
        &path,
        tar_bz2(&[Item::Dir("docs/"), Item::File("docs/readme.md", b"# hi")]),
    )
    .unwrap();

    let file = File::open(&path).unwrap();
    assert_eq!(list_entries(file).unwrap(), ["docs/readme.md"]);
}
