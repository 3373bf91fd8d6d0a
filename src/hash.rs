pub mod compress;
pub mod consts;
pub mod digest;
pub mod engine;

// Re-export the streaming engine and one-shot helpers
pub use engine::{md5_digest, md5_hex, Md5};

// Re-export the digest value
pub use digest::Md5Digest;

// Re-export block and output sizes
pub use consts::{BLOCK_LEN, DIGEST_LEN};
