/*
    This module implements taproot output key computing under
    BIP341, covering key path spends only. A script tree commitment
    can be supplied as a precomputed merkle root.
*/

use crate::{
    hash::tagged_hash,
    key::Key,
    key::SchnorrPublicKey
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaprootErr {
    InvalidTweak,
    PointAtInfinity
}

pub trait TaprootTaggedHash {
    fn from_slice(slice: &[u8]) -> [u8; 32];
}

/// Macro to create tagged hash types
macro_rules! taproot_tagged_hashes {
    ($name: ident, $tag: expr) => {
        pub struct $name;

        impl TaprootTaggedHash for $name {
            fn from_slice(slice: &[u8]) -> [u8; 32] {
                tagged_hash($tag, slice)
            }
        }
    }
}

taproot_tagged_hashes!(TapTweakHash, "TapTweak"); // Used for the final key tweak

impl TapTweakHash {
    /// Create the TapTweakHash from a schnorr public key and tweak value.
    /// Tweak value is either the merkle root of a script tree or nothing.
    pub fn from_key_and_tweak(key: &SchnorrPublicKey, tweak: Vec<u8>) -> [u8; 32] {
        let mut data = key.as_bytes::<32>().to_vec();
        data.extend_from_slice(&tweak);
        TapTweakHash::from_slice(&data)
    }
}

/**
    Computes the taproot output key Q = P + t*G where t is the
    TapTweak commitment of the internal key P and the optional
    script tree merkle root.
*/
pub fn taproot_output_key(
    internal_key: &SchnorrPublicKey,
    merkle_root: Option<[u8; 32]>
) -> Result<SchnorrPublicKey, TaprootErr> {
    internal_key.tap_tweak(merkle_root)
}
