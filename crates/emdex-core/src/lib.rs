//! Core library for emdex.
//!
//! Everything here is pure and I/O-free: the binary channel decoder, the
//! session range selector, the raw row types mirrored from the store, and
//! the mapper that folds a row into a flat JSON record.

mod channel;
mod error;
mod record;
mod selector;
mod types;

pub use channel::{decode_channel, ChannelSpec, DecodedChannel, SampleKind};
pub use error::ExportError;
pub use record::{client_record, session_record, ExportRecord};
pub use selector::parse_selector;
pub use types::{ClientRow, SessionRow};

/// The one database layout this tool understands. Any other value in
/// `VersionTable` aborts the run before a single row is fetched.
pub const SUPPORTED_DB_VERSION: i64 = 9;
