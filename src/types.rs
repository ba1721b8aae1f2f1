//! Core identifier types shared across the crate.

/// Content hash identifying one versioned object in the store.
pub type Hash = [u8; 32];

/// Render a hash as lowercase hex.
pub fn format_hash(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Abbreviated hash for log lines: first 12 hex characters.
pub fn short_hash(hash: &Hash) -> String {
    hex::encode(&hash[..6])
}
