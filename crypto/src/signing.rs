//! Payment signatures
//!
//! The gateway recomputes the digest of `merchant_id:secret_word:sum:order_id`
//! on its side and compares it with the `s` parameter of a payment link, so
//! field order and the `:` separator must not change.

use enot_core::{EnotError, EnotResult, Signature};

use crate::hashing::hash_joined;

pub const SIGNATURE_SEPARATOR: &str = ":";

/// Sign a payment for `sum` and `order_id`
pub fn sign_payment(merchant_id: &str, secret_word: &str, sum: &str, order_id: &str) -> Signature {
    hash_joined(&[merchant_id, secret_word, sum, order_id], SIGNATURE_SEPARATOR)
}

/// Sign a payment and render the digest as lowercase hex
pub fn sign_payment_hex(merchant_id: &str, secret_word: &str, sum: &str, order_id: &str) -> String {
    sign_payment(merchant_id, secret_word, sum, order_id).to_hex()
}

/// Verify a hex signature (case-insensitive) against the expected digest
pub fn verify_payment(
    merchant_id: &str,
    secret_word: &str,
    sum: &str,
    order_id: &str,
    signature_hex: &str,
) -> EnotResult<()> {
    let provided = Signature::from_hex(&signature_hex.to_ascii_lowercase())?;
    let expected = sign_payment(merchant_id, secret_word, sum, order_id);

    if digests_match(&provided, &expected) {
        Ok(())
    } else {
        Err(EnotError::InvalidSignature(format!(
            "signature mismatch for order {}",
            order_id
        )))
    }
}

/// Compare digests without short-circuiting on the first differing byte
fn digests_match(a: &Signature, b: &Signature) -> bool {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Check a signature (returns bool instead of Result)
pub fn is_valid_payment_signature(
    merchant_id: &str,
    secret_word: &str,
    sum: &str,
    order_id: &str,
    signature_hex: &str,
) -> bool {
    verify_payment(merchant_id, secret_word, sum, order_id, signature_hex).is_ok()
}
