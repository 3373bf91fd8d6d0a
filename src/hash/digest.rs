//! The 16-byte MD5 digest value.

use std::fmt;
use std::str::FromStr;

use super::consts::DIGEST_LEN;
use crate::error::{Error, Result};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A finished MD5 digest.
///
/// Bytes are kept in canonical MD5 output order. Comparisons are lexicographic over
/// those bytes, first byte most significant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Md5Digest([u8; DIGEST_LEN]);

impl Md5Digest {
    /// Wraps raw digest bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses 32 hexadecimal characters (either case).
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Lowercase hex, 32 characters, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Lowercase hex as ASCII bytes, without allocating.
    pub fn encode_hex(&self) -> [u8; 2 * DIGEST_LEN] {
        let mut out = [0u8; 2 * DIGEST_LEN];
        for (pair, &byte) in out.chunks_exact_mut(2).zip(self.0.iter()) {
            pair[0] = HEX_DIGITS[(byte >> 4) as usize];
            pair[1] = HEX_DIGITS[(byte & 0x0f) as usize];
        }
        out
    }

    /// 128 `'0'`/`'1'` characters, most significant bit of each byte first.
    pub fn to_bin(&self) -> String {
        self.encode_bin().iter().map(|&b| b as char).collect()
    }

    /// Binary rendering as ASCII bytes, without allocating.
    pub fn encode_bin(&self) -> [u8; 8 * DIGEST_LEN] {
        let mut out = [0u8; 8 * DIGEST_LEN];
        for (octet, &byte) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            for (bit, slot) in octet.iter_mut().enumerate() {
                *slot = if byte & (0x80 >> bit) != 0 { b'1' } else { b'0' };
            }
        }
        out
    }
}

impl From<[u8; DIGEST_LEN]> for Md5Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Md5Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Md5Digest({self:x})")
    }
}
