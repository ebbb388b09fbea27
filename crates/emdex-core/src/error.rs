use thiserror::Error;

use crate::SUPPORTED_DB_VERSION;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("database reports version {found}, this tool only supports version {SUPPORTED_DB_VERSION}")]
    UnsupportedVersion { found: i64 },

    #[error("invalid session selector token '{token}'")]
    InvalidSelector { token: String },
}
