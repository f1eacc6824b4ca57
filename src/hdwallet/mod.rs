/*
    This module implements hierarchical deterministic key trees
    under the BIP32 standard, with the BIP44, BIP49, BIP84 and
    BIP86 account layouts layered on top.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

mod extended_keys;
mod ckd;
mod path;
mod hdwallet;

pub use extended_keys::{
    ExtendedKey,
    Xprv,
    Xpub
};
pub use ckd::{
    derive_xprv,
    derive_xpub,
    ChildOptions
};
pub use path::Path;
pub use hdwallet::{
    HDWallet,
    WalletType
};

use crate::address::AddressErr;

#[derive(Debug, Clone, PartialEq)]
pub enum HDWError {
    //Master key generation
    InvalidSeedLength(usize),
    InvalidKeyMaterial(),

    //Child key derivation
    CantHarden(),
    IndexTooLarge(u32),
    IndexReserved(u32),

    //Serialized key import
    InvalidChecksum(),
    InvalidLength(usize),
    UnknownVersionBytes(Vec<u8>),
    BadChar(usize),

    //Path handling
    BadPath(String),

    //Address encoding raised while deriving wallet addresses
    AddressEncoding(AddressErr)
}
