//! Streaming MD5 engine.
//!
//! [`Md5`] keeps four running state words, at most one partial block of pending
//! input, and the total number of bytes ingested. Full blocks are compressed as
//! soon as they are available; finalization pads a scratch copy and leaves the
//! running state alone, so a stream can be fingerprinted mid-way and then
//! continued.
//!
//! Nothing here allocates. All buffers are fixed-size arrays, and the engine wipes
//! them when dropped.

use std::ffi::CStr;
use std::fmt;
use std::io;

use zeroize::Zeroize;

use super::compress::{compress, state_to_bytes};
use super::consts::{BLOCK_LEN, INIT_STATE, LENGTH_SUFFIX_LEN, PADDING_MARKER};
use super::digest::Md5Digest;
use crate::error::{Error, Result};

/// Incremental MD5 hasher.
///
/// Invariant: `state` is the compression of exactly `length - buffer_len` bytes,
/// and `buffer_len < BLOCK_LEN`.
#[derive(Clone)]
pub struct Md5 {
    state: [u32; 4],
    /// Pending bytes not yet compressed; only `buffer[..buffer_len]` is meaningful.
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    /// Total bytes ingested.
    length: u64,
}

impl Md5 {
    /// Creates an engine in the RFC 1321 initial state.
    pub fn new() -> Self {
        Self {
            state: INIT_STATE,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            length: 0,
        }
    }

    /// Creates an engine that has already ingested `message`.
    pub fn with_message(message: &[u8]) -> Self {
        let mut hasher = Self::new();
        // A fresh counter cannot overflow on a single slice.
        hasher.length = message.len() as u64;
        hasher.absorb(message);
        hasher
    }

    /// Feeds more bytes into the digest.
    ///
    /// Any split of a message across calls gives the same digest as feeding it in
    /// one call. Fails, leaving the engine untouched, if the cumulative length
    /// would exceed `u64::MAX` bytes.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        let length = u64::try_from(data.len())
            .ok()
            .and_then(|n| self.length.checked_add(n))
            .ok_or_else(|| {
                log::debug!(
                    "rejecting {} bytes: MD5 length counter already at {}",
                    data.len(),
                    self.length
                );
                Error::LengthOverflow {
                    total: self.length,
                    additional: data.len(),
                }
            })?;
        self.length = length;
        self.absorb(data);
        Ok(())
    }

    /// Feeds the UTF-8 bytes of `text`.
    pub fn update_str(&mut self, text: &str) -> Result<()> {
        self.update(text.as_bytes())
    }

    /// Feeds a NUL-terminated string, excluding the terminator.
    pub fn update_cstr(&mut self, text: &CStr) -> Result<()> {
        self.update(text.to_bytes())
    }

    /// Total number of bytes ingested so far.
    pub fn len(&self) -> u64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns to the initial state, discarding everything ingested.
    pub fn reset(&mut self) {
        log::trace!("resetting MD5 engine after {} bytes", self.length);
        // The old value is dropped, and so wiped, by the assignment.
        *self = Self::new();
    }

    /// Produces the digest of everything ingested so far.
    ///
    /// Works on a copy of the running state: the engine is not modified, calling
    /// this repeatedly gives the same digest, and further `update` calls continue
    /// the original stream.
    pub fn finalize(&self) -> Md5Digest {
        let mut state = self.state;
        let mut block = [0u8; BLOCK_LEN];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = PADDING_MARKER;

        // The marker must leave room for the 8-byte length suffix, otherwise the
        // suffix goes into a second, otherwise empty block.
        if self.buffer_len + 1 > BLOCK_LEN - LENGTH_SUFFIX_LEN {
            log::trace!(
                "MD5 padding spills into a second block ({} pending bytes)",
                self.buffer_len
            );
            compress(&mut state, &block);
            block.zeroize();
        }

        // Length in bits, modulo 2^64.
        let bit_length = self.length.wrapping_mul(8);
        block[BLOCK_LEN - LENGTH_SUFFIX_LEN..].copy_from_slice(&bit_length.to_le_bytes());
        compress(&mut state, &block);
        block.zeroize();

        let digest = Md5Digest::from_bytes(state_to_bytes(&state));
        state.zeroize();
        digest
    }

    /// Appends `data` to the stream without touching the length counter.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buffer_len > 0 {
            let take = data.len().min(BLOCK_LEN - self.buffer_len);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Full blocks straight from the caller's slice.
        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
            compress(&mut self.state, block);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

impl Zeroize for Md5 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.length.zeroize();
    }
}

impl Drop for Md5 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Md5 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Buffered message bytes stay out of logs.
        f.debug_struct("Md5")
            .field("length", &self.length)
            .field("pending", &self.buffer_len)
            .finish()
    }
}

impl io::Write for Md5 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the MD5 digest of `data` in a single shot.
pub fn md5_digest(data: &[u8]) -> Md5Digest {
    Md5::with_message(data).finalize()
}

/// Computes the MD5 digest of `data` as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    md5_digest(data).to_hex()
}
