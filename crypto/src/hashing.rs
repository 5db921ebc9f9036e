//! Hashing functions using MD5

use enot_core::Signature;

/// Compute the MD5 digest of data
pub fn md5_hash(data: &[u8]) -> Signature {
    Signature::from_bytes(md5::compute(data).0)
}

/// Compute the MD5 digest as a lowercase hex string
pub fn md5_hex(data: &[u8]) -> String {
    md5_hash(data).to_hex()
}

/// Hash several parts joined by `separator`
pub fn hash_joined<S: AsRef<str>>(parts: &[S], separator: &str) -> Signature {
    let mut ctx = md5::Context::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            ctx.consume(separator.as_bytes());
        }
        ctx.consume(part.as_ref().as_bytes());
    }
    Signature::from_bytes(ctx.compute().0)
}
