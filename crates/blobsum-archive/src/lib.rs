//! Entry listings for tar.bz2 archives.
//!
//! # Architecture
//!
//! - `detect.rs` - bzip2 magic detection
//! - `format.rs` - single-member bzip2 decoder
//! - `listing.rs` - lazy tar entry enumeration and listing text

pub use detect::is_bzip2;
pub use error::{Error, Result};
pub use format::Decoder;
pub use listing::{EntryNames, TarBz2Archive, list_entries, listing_text};

mod detect;
mod error;
mod format;
mod listing;
