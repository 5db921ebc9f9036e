//! ENOT SDK Cryptography Module
//!
//! Implements the gateway's signing convention:
//! - MD5 digests rendered as lowercase hex
//! - Payment signatures over `merchant:secret:sum:order`

pub mod signing;
pub mod hashing;

pub use signing::*;
pub use hashing::*;
