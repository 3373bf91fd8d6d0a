use thiserror::Error;

/// Errors reported by the MD5 engine and digest parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Ingesting `additional` more bytes would push the cumulative byte
    /// counter past `u64::MAX`.
    #[error("message length overflow: {total} bytes already ingested, {additional} more would exceed 2^64 - 1")]
    LengthOverflow {
        /// Bytes ingested before the rejected call.
        total: u64,
        /// Size of the rejected input.
        additional: usize,
    },

    /// A digest string was not exactly 32 hexadecimal characters.
    #[error("invalid MD5 digest string: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;
