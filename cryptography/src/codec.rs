//! Comma-delimited hexadecimal text form of keys and signatures.
//!
//! Every integer is written as the lowercase hex of its minimal big-endian byte representation:
//! no fixed width and no leading zero bytes (zero has no bytes and encodes as the empty string).
//! Public keys are `x,y`, signatures are `r,s`, and private keys are a single field.
//!
//! Decoding reconstructs integer values, so a value round-trips even though its text is not a
//! fixed-width layout. Decoded values are not validated against the curve: use
//! [crate::secp256r1::PublicKey::is_on_curve] when that guarantee is needed.
//!
//! # Example
//! ```rust
//! use hexsig_cryptography::{codec, secp256r1::PublicKey, FormatError};
//!
//! let public_key = codec::decode_public_key("01,ff").unwrap();
//! assert_eq!(public_key.x().to_string(), "1");
//! assert_eq!(codec::encode_public_key(&public_key), "01,ff");
//!
//! assert_eq!(
//!     codec::decode_public_key("abc"),
//!     Err(FormatError::FieldCount { expected: 2, found: 1 }),
//! );
//! assert_eq!(
//!     "zz,01".parse::<PublicKey>(),
//!     Err(FormatError::InvalidHex { field: 0 }),
//! );
//! ```

use crate::{
    secp256r1::{PrivateKey, PublicKey, Signature},
    FormatError,
};
use hexsig_utils::{from_hex, hex};
use num_bigint::BigUint;
use std::{
    fmt::{self, Display},
    str::FromStr,
};
use tracing::trace;

/// Separator between fields of a multi-field value.
pub const DELIMITER: char = ',';

/// Encode `x,y`.
pub fn encode_public_key(public_key: &PublicKey) -> String {
    join(public_key.x(), public_key.y())
}

/// Encode the private scalar as a single field.
pub fn encode_private_key(private_key: &PrivateKey) -> String {
    encode_integer(private_key.scalar())
}

/// Encode `r,s`.
pub fn encode_signature(signature: &Signature) -> String {
    join(signature.r(), signature.s())
}

/// Decode `x,y`. The point is not checked to lie on the curve.
pub fn decode_public_key(text: &str) -> Result<PublicKey, FormatError> {
    let (x, y) = split(text)?;
    Ok(PublicKey::new(x, y))
}

/// Decode a single-field private scalar. The scalar is not range checked.
pub fn decode_private_key(text: &str) -> Result<PrivateKey, FormatError> {
    decode_integer(text, 0).map(PrivateKey::new)
}

/// Decode `r,s`. The components are not range checked.
pub fn decode_signature(text: &str) -> Result<Signature, FormatError> {
    let (r, s) = split(text)?;
    Ok(Signature::new(r, s))
}

/// Minimal big-endian bytes of `value` (empty for zero).
fn minimal_bytes(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        return Vec::new();
    }
    value.to_bytes_be()
}

fn encode_integer(value: &BigUint) -> String {
    hex(&minimal_bytes(value))
}

fn decode_integer(field: &str, index: usize) -> Result<BigUint, FormatError> {
    match from_hex(field) {
        Some(bytes) => Ok(BigUint::from_bytes_be(&bytes)),
        None => {
            trace!(field = index, "rejected non-hex field");
            Err(FormatError::InvalidHex { field: index })
        }
    }
}

fn join(first: &BigUint, second: &BigUint) -> String {
    format!(
        "{}{}{}",
        encode_integer(first),
        DELIMITER,
        encode_integer(second)
    )
}

fn split(text: &str) -> Result<(BigUint, BigUint), FormatError> {
    let fields: Vec<&str> = text.split(DELIMITER).collect();
    if fields.len() != 2 {
        trace!(found = fields.len(), "rejected field count");
        return Err(FormatError::FieldCount {
            expected: 2,
            found: fields.len(),
        });
    }
    Ok((decode_integer(fields[0], 0)?, decode_integer(fields[1], 1)?))
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_public_key(self))
    }
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_private_key(self))
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_signature(self))
    }
}

impl FromStr for PublicKey {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_public_key(s)
    }
}

impl FromStr for PrivateKey {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_private_key(s)
    }
}

impl FromStr for Signature {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_signature(s)
    }
}
