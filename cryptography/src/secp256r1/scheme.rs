use crate::{sha256::Digest, Error, SigningError};
use num_bigint::BigUint;
use p256::{
    ecdsa::{
        signature::hazmat::{PrehashSigner, PrehashVerifier, RandomizedPrehashSigner},
        Signature as EcdsaSignature, SigningKey, VerifyingKey,
    },
    elliptic_curve::sec1::Coordinates,
    EncodedPoint, FieldBytes,
};
use rand::{rngs::StdRng, CryptoRng, RngCore, SeedableRng};
use std::fmt::{self, Debug};
use tracing::debug;

const SCALAR_LENGTH: usize = 32;

/// Private scalar of a secp256r1 key.
///
/// The scalar is not checked against the curve order until it is used.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: BigUint,
}

impl PrivateKey {
    /// Wrap a scalar without validating it.
    pub fn new(scalar: BigUint) -> Self {
        Self { scalar }
    }

    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Derive the public point `scalar * G`.
    pub fn public_key(&self) -> Result<PublicKey, SigningError> {
        let signer = self.signing_key()?;
        Ok(PublicKey::from(signer.verifying_key()))
    }

    fn signing_key(&self) -> Result<SigningKey, SigningError> {
        let bytes = field_bytes(&self.scalar).ok_or(SigningError::InvalidScalar)?;
        SigningKey::from_bytes(&bytes).map_err(|_| SigningError::InvalidScalar)
    }
}

impl From<&SigningKey> for PrivateKey {
    fn from(signer: &SigningKey) -> Self {
        Self::new(BigUint::from_bytes_be(&signer.to_bytes()))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// Affine coordinates of a public point.
///
/// The point is not checked to lie on the curve (see [PublicKey::is_on_curve]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Wrap coordinates without validating them.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigUint {
        &self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Returns whether the coordinates describe a point on secp256r1 (other than the identity).
    pub fn is_on_curve(&self) -> bool {
        self.verifying_key().is_some()
    }

    fn verifying_key(&self) -> Option<VerifyingKey> {
        let x = field_bytes(&self.x)?;
        let y = field_bytes(&self.y)?;
        let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
        VerifyingKey::from_sec1_bytes(point.as_bytes()).ok()
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifier: &VerifyingKey) -> Self {
        let point = verifier.to_encoded_point(false);
        match point.coordinates() {
            Coordinates::Uncompressed { x, y } => {
                Self::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
            }
            _ => unreachable!("uncompressed encoding of a verifying key"),
        }
    }
}

/// ECDSA signature `(r, s)`.
///
/// Components are not checked to lie in `[1, n-1]` until verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Wrap components without validating them.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &BigUint {
        &self.r
    }

    pub fn s(&self) -> &BigUint {
        &self.s
    }

    fn to_ecdsa(&self) -> Option<EcdsaSignature> {
        let r = field_bytes(&self.r)?;
        let s = field_bytes(&self.s)?;
        EcdsaSignature::from_scalars(r, s).ok()
    }
}

impl From<EcdsaSignature> for Signature {
    fn from(signature: EcdsaSignature) -> Self {
        let (r, s) = signature.split_bytes();
        Self::new(BigUint::from_bytes_be(&r), BigUint::from_bytes_be(&s))
    }
}

/// A private scalar and its public point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Generate a key pair with entropy drawn from `rng`.
    ///
    /// Candidate scalars are sampled until one falls in `[1, n-1]`. Fails if `rng` cannot
    /// provide entropy.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let mut candidate = [0u8; SCALAR_LENGTH];
        let signer = loop {
            rng.try_fill_bytes(&mut candidate).map_err(Error::Generation)?;
            if let Ok(signer) = SigningKey::from_bytes(FieldBytes::from_slice(&candidate)) {
                break signer;
            }
        };
        let keys = Self::from(&signer);
        debug!(public_key = %keys.public_key, "generated key pair");
        Ok(keys)
    }

    /// Derive a key pair from a seed.
    ///
    /// # Warning
    ///
    /// This function is insecure and should only be used for examples
    /// and testing.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from(&SigningKey::random(&mut rng))
    }

    /// Rebuild a key pair from a (possibly decoded) private key.
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self, SigningError> {
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl From<&SigningKey> for KeyPair {
    fn from(signer: &SigningKey) -> Self {
        Self {
            private_key: PrivateKey::from(signer),
            public_key: PublicKey::from(signer.verifying_key()),
        }
    }
}

/// Sign `digest` with a nonce derived per RFC 6979 and hedged with entropy from `rng`.
///
/// Fails if the private scalar is outside `[1, n-1]` or if `rng` cannot provide entropy.
pub fn sign<R: RngCore + CryptoRng>(
    private_key: &PrivateKey,
    digest: &Digest,
    rng: &mut R,
) -> Result<Signature, SigningError> {
    let signer = private_key.signing_key()?;
    let mut seed = [0u8; 32];
    rng.try_fill_bytes(&mut seed).map_err(SigningError::Entropy)?;
    let mut nonce_rng = StdRng::from_seed(seed);
    let signature: EcdsaSignature = signer
        .sign_prehash_with_rng(&mut nonce_rng, digest.as_ref())
        .map_err(|_| SigningError::Primitive)?;
    debug!(digest = %digest, "signed digest");
    Ok(signature.into())
}

/// Sign `digest` with a nonce derived deterministically per RFC 6979.
///
/// Fails if the private scalar is outside `[1, n-1]`.
pub fn sign_deterministic(
    private_key: &PrivateKey,
    digest: &Digest,
) -> Result<Signature, SigningError> {
    let signer = private_key.signing_key()?;
    let signature: EcdsaSignature = signer
        .sign_prehash(digest.as_ref())
        .map_err(|_| SigningError::Primitive)?;
    debug!(digest = %digest, "signed digest deterministically");
    Ok(signature.into())
}

/// Verify `signature` over `digest` against `public_key`.
///
/// Never fails: a coordinate that is off the curve, a component outside `[1, n-1]`, or any
/// value wider than 32 bytes yields `false`.
pub fn verify(public_key: &PublicKey, signature: &Signature, digest: &Digest) -> bool {
    let verifier = match public_key.verifying_key() {
        Some(verifier) => verifier,
        None => return false,
    };
    let signature = match signature.to_ecdsa() {
        Some(signature) => signature,
        None => return false,
    };
    verifier.verify_prehash(digest.as_ref(), &signature).is_ok()
}

/// Left-pad `value` to a field element, or `None` if it is wider than 32 bytes.
fn field_bytes(value: &BigUint) -> Option<FieldBytes> {
    let bytes = value.to_bytes_be();
    if bytes.len() > SCALAR_LENGTH {
        return None;
    }
    let mut padded = [0u8; SCALAR_LENGTH];
    padded[SCALAR_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    Some(FieldBytes::clone_from_slice(&padded))
}
