//! Streaming MD5 (RFC 1321) message digest.
//!
//! MD5 is a legacy algorithm. It is fine for fingerprinting and integrity checks
//! against accidental corruption, but it is broken against deliberate collisions
//! and must not be used where an attacker chooses the input.
//!
//! ```
//! use md5sum::Md5;
//!
//! let mut hasher = Md5::new();
//! hasher.update(b"ab")?;
//! hasher.update(b"c")?;
//! assert_eq!(hasher.finalize().to_hex(), "900150983cd24fb0d6963f7d28e17f72");
//! # Ok::<(), md5sum::Error>(())
//! ```

pub mod error;
pub mod hash;

pub use error::{Error, Result};
pub use hash::{md5_digest, md5_hex, Md5, Md5Digest, BLOCK_LEN, DIGEST_LEN};
