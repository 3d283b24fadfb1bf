//! ECDSA over secp256r1 (NIST P-256).
//!
//! Keys and signatures are plain records of unsigned big integers so that any value produced by
//! [crate::codec] can be represented, including values that are not valid on the curve. Range and
//! curve checks happen when a value is used: [sign] rejects an out-of-range private scalar and
//! [verify] returns `false` for anything malformed.
//!
//! Signing operates over a precomputed digest (see [crate::sha256]) and derives its nonce as
//! specified in [RFC 6979](https://datatracker.ietf.org/doc/html/rfc6979), hedged with fresh
//! entropy by [sign] or purely deterministic with [sign_deterministic]. Signatures are not
//! normalized to low-S.
//!
//! # Example
//! ```rust
//! use hexsig_cryptography::{secp256r1::{sign, verify, KeyPair}, sha256};
//! use rand::rngs::OsRng;
//!
//! // Generate a new key pair
//! let keys = KeyPair::generate(&mut OsRng).unwrap();
//!
//! // Sign the digest of a message
//! let digest = sha256::hash(b"Hello, world!");
//! let signature = sign(keys.private_key(), &digest, &mut OsRng).unwrap();
//!
//! // Verify the signature
//! assert!(verify(keys.public_key(), &signature, &digest));
//! assert!(!verify(keys.public_key(), &signature, &sha256::hash(b"Goodbye, world!")));
//! ```

mod scheme;
pub use scheme::{sign, sign_deterministic, verify, KeyPair, PrivateKey, PublicKey, Signature};
