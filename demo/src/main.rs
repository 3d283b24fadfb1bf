//! Generate a key pair, sign a message digest, verify it, and round-trip everything through hex text.
//!
//! The demonstration runs a fixed sequence: generate a secp256r1 key pair, hash a message with
//! SHA-256, sign the digest, verify the signature, serialize the public key, private key, and
//! signature to comma-delimited hex, deserialize them, and verify again with the deserialized
//! values. Any failure aborts the process with a diagnostic.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --bin hexsig-demo
//! ```
//!
//! ```txt
//! Digest: 315f5bdb76d078c43b8ac0064e4a0164612b1fce77c869345bfc94c75894edd3
//! Signature is valid!
//! Serialized Public Key: <x>,<y>
//! Serialized Private Key: <d>
//! Serialized Signature: <r>,<s>
//! ...
//! ```
//!
//! ## Options
//!
//! * `--message <TEXT>`: message to sign (default `Hello, world!`).
//! * `--seed <u64>`: derive the key pair from a seed instead of the OS entropy source. This is
//!   insecure and only useful for reproducible runs.
//! * `--log-level <LEVEL>`: `trace`, `debug`, `info`, `warn`, or `error` (default `info`).

use clap::{value_parser, Arg, Command};
use hexsig_cryptography::{
    codec,
    secp256r1::{sign, verify, KeyPair},
    sha256,
};
use rand::rngs::OsRng;
use tracing::{info, warn, Level};

const DEFAULT_MESSAGE: &str = "Hello, world!";

fn main() {
    // Parse arguments
    let matches = Command::new("hexsig-demo")
        .about("sign a message digest and round-trip keys and signatures through hex text")
        .arg(
            Arg::new("message")
                .long("message")
                .required(false)
                .default_value(DEFAULT_MESSAGE)
                .help("Message to hash and sign"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .required(false)
                .value_parser(value_parser!(u64))
                .help("Derive keys from a seed (insecure)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .required(false)
                .default_value("info"),
        )
        .get_matches();

    // Create logger
    let level = matches
        .get_one::<String>("log-level")
        .expect("Please provide log level")
        .parse::<Level>()
        .expect("Log level not well-formed");
    tracing_subscriber::fmt().with_max_level(level).init();

    // Generate keys
    let keys = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            warn!(seed, "deriving keys from seed");
            KeyPair::from_seed(*seed)
        }
        None => KeyPair::generate(&mut OsRng).expect("Failed to generate keys"),
    };
    info!(public_key = %keys.public_key(), "loaded keys");

    // Hash message
    let message = matches
        .get_one::<String>("message")
        .expect("Please provide message");
    let digest = sha256::hash(message.as_bytes());
    info!(len = message.len(), %digest, "hashed message");
    println!("Digest: {}", digest);

    // Sign digest
    let signature = sign(keys.private_key(), &digest, &mut OsRng).expect("Failed to sign digest");

    // Verify signature
    report(verify(keys.public_key(), &signature, &digest));

    // Serialize
    let serialized_public_key = codec::encode_public_key(keys.public_key());
    let serialized_private_key = codec::encode_private_key(keys.private_key());
    let serialized_signature = codec::encode_signature(&signature);
    println!("Serialized Public Key: {}", serialized_public_key);
    println!("Serialized Private Key: {}", serialized_private_key);
    println!("Serialized Signature: {}", serialized_signature);

    // Deserialize
    let public_key = codec::decode_public_key(&serialized_public_key)
        .expect("Failed to deserialize public key");
    let private_key = codec::decode_private_key(&serialized_private_key)
        .expect("Failed to deserialize private key");
    let signature =
        codec::decode_signature(&serialized_signature).expect("Failed to deserialize signature");
    let restored = KeyPair::from_private_key(private_key)
        .expect("Deserialized private key is out of range");
    println!("Deserialized Public Key: {:?}", public_key);
    println!("Deserialized Private Key: derives {}", restored.public_key());
    println!("Deserialized Signature: {:?}", signature);
    if restored.public_key() != &public_key {
        warn!("deserialized private key does not derive deserialized public key");
    }

    // Verify with deserialized values
    report(verify(&public_key, &signature, &digest));
}

fn report(valid: bool) {
    if valid {
        println!("Signature is valid!");
    } else {
        warn!("signature did not verify");
        println!("Signature is not valid!");
    }
}
