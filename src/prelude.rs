/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_hdwallet::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        PubKey,
        PrivKey,
        SchnorrPublicKey,
        Key,
        KeyError
    },

    address::{
        Address,
        AddressErr
    },

    bip39::{
        Mnemonic,
        MnemonicErr
    },

    hdwallet::{
        HDWallet,
        ChildOptions,
        ExtendedKey,
        Xprv, Xpub,
        HDWError,
        Path,
        WalletType
    },

    encoding::{
        version_prefix::VersionPrefix,
        version_prefix::ToVersionPrefix
    },

    script::{
        RedeemScript,
        WitnessProgram
    },

    util::{
        encode_02x,
        decode_02x,
        try_into,
        Network
    }

};
