//! The MD5 block compression function and the byte/word conversions it relies on.
//!
//! MD5 reads each 64-byte block as sixteen little-endian 32-bit words and emits its
//! four state words little-endian as well. Both directions go through explicit
//! conversions here, so the result never depends on host byte order.

use super::consts::{BLOCK_LEN, DIGEST_LEN, K, S};

/// Reads a 64-byte block as sixteen little-endian words.
pub fn block_to_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
    let mut words = [0u32; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    words
}

/// Writes the four state words as sixteen little-endian bytes.
pub fn state_to_bytes(state: &[u32; 4]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    for (bytes, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Runs the 64 MD5 rounds over `block` and adds the result into `state`.
pub fn compress(state: &mut [u32; 4], block: &[u8; BLOCK_LEN]) {
    let m = block_to_words(block);
    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let (f, g) = match i {
            0..=15 => ((b & c) | (!b & d), i),
            16..=31 => ((d & b) | (!d & c), (5 * i + 1) % 16),
            32..=47 => (b ^ c ^ d, (3 * i + 5) % 16),
            _ => (c ^ (b | !d), (7 * i) % 16),
        };

        let f = f
            .wrapping_add(a)
            .wrapping_add(K[i])
            .wrapping_add(m[g]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(f.rotate_left(S[i]));
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::consts::INIT_STATE;

    #[test]
    fn test_words_are_little_endian() {
        let mut block = [0u8; BLOCK_LEN];
        block[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        block[60..].copy_from_slice(&[0xff, 0x00, 0x00, 0x80]);
        let words = block_to_words(&block);
        assert_eq!(words[0], 0x04030201);
        assert_eq!(words[15], 0x800000ff);
        assert!(words[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_state_bytes_are_little_endian() {
        // Independent of host order: the initial state serializes to the
        // well-known 0123456789abcdef fedcba9876543210 byte pattern.
        assert_eq!(
            hex::encode(state_to_bytes(&INIT_STATE)),
            "0123456789abcdeffedcba9876543210"
        );
    }

    #[test]
    fn test_compress_empty_message_block() {
        // The padded block of the empty message is 0x80 followed by zeros.
        let mut block = [0u8; BLOCK_LEN];
        block[0] = 0x80;
        let mut state = INIT_STATE;
        compress(&mut state, &block);
        assert_eq!(
            hex::encode(state_to_bytes(&state)),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_compress_is_pure_in_its_inputs() {
        let block = [0x5au8; BLOCK_LEN];
        let mut first = INIT_STATE;
        let mut second = INIT_STATE;
        compress(&mut first, &block);
        compress(&mut second, &block);
        assert_eq!(first, second);
        assert_ne!(first, INIT_STATE);
    }
}
