/*
    Library to derive hierarchical deterministic keys and
    addresses for Bitcoin.

    Implements the BIP32 key tree with the BIP39 seed step
    and the BIP44, BIP49, BIP84 and BIP86 account layouts
    (legacy, nested segwit, native segwit and taproot).

    References:
        - The BIP repository (https://github.com/bitcoin/bips)
            bip-0032, bip-0039, bip-0044, bip-0049, bip-0084,
            bip-0086, bip-0173, bip-0341 and bip-0350.

        - The Rust-Bitcoin repository (https://github.com/rust-bitcoin/rust-bitcoin)
            for providing clear reference code to work against, especially with bip32.
*/

//Outward facing modules
pub mod key;
pub mod address;
pub mod bip39;
pub mod hdwallet;
pub mod script;
pub mod taproot;
pub mod encoding;
pub mod util;
pub mod prelude;

//Modules for internal use
mod hash;
mod entropy;
mod impls;

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey, XOnlyPublicKey};
use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256, Sha512};
use ripemd::Ripemd160;
