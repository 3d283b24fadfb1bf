//! Generate secp256r1 keys, sign digests, verify signatures, and round-trip them through hex text.
//!
//! # Status
//!
//! `hexsig-cryptography` is a minimal illustration of an ECDSA round-trip. The text format carries
//! no version tag, length prefix, or checksum and should not be used as a wire format.
//!
//! # Example
//! ```rust
//! use hexsig_cryptography::{codec, secp256r1::{self, KeyPair}, sha256};
//! use rand::rngs::OsRng;
//!
//! // Generate a key pair
//! let keys = KeyPair::generate(&mut OsRng).unwrap();
//!
//! // Hash and sign a message
//! let digest = sha256::hash(b"Hello, world!");
//! let signature = secp256r1::sign(keys.private_key(), &digest, &mut OsRng).unwrap();
//! assert!(secp256r1::verify(keys.public_key(), &signature, &digest));
//!
//! // Round-trip through text
//! let public_key = codec::decode_public_key(&codec::encode_public_key(keys.public_key())).unwrap();
//! let signature = codec::decode_signature(&codec::encode_signature(&signature)).unwrap();
//! assert!(secp256r1::verify(&public_key, &signature, &digest));
//! ```

use thiserror::Error;

pub mod codec;
pub mod secp256r1;
pub mod sha256;
pub use sha256::{hash, Sha256};

/// Interface for incremental hashing.
///
/// This trait is required to implement the `Clone` trait because it is often
/// part of a struct that is cloned. In practice, implementations do not actually
/// clone the hasher state but users should not rely on this behavior and call `reset`
/// after cloning.
pub trait Hasher: Clone + Send + Sync + 'static {
    /// Digest generated by the hasher.
    type Digest: AsRef<[u8]> + Copy + Eq;

    /// Create a new hasher.
    fn new() -> Self;

    /// Append message to previously recorded data.
    fn update(&mut self, message: &[u8]);

    /// Hash all recorded data and reset the hasher
    /// to the initial state.
    fn finalize(&mut self) -> Self::Digest;

    /// Reset the hasher without generating a hash.
    ///
    /// This function does not need to be called after `finalize`.
    fn reset(&mut self);
}

/// Errors returned by key generation, signing, and decoding.
///
/// A signature that does not verify is not an error (verification returns `false`).
#[derive(Error, Debug)]
pub enum Error {
    #[error("key generation failed: {0}")]
    Generation(rand::Error),
    #[error("signing failed: {0}")]
    Signing(#[from] SigningError),
    #[error("malformed text: {0}")]
    Format(#[from] FormatError),
    #[error("invalid digest length")]
    InvalidDigestLength,
}

/// Reasons a signature could not be produced.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("private scalar outside [1, n-1]")]
    InvalidScalar,
    #[error("entropy source failed: {0}")]
    Entropy(rand::Error),
    #[error("signature primitive failed")]
    Primitive,
}

/// Reasons a serialized key or signature could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field {field} is not valid hexadecimal")]
    InvalidHex { field: usize },
}
