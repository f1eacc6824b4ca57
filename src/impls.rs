/*
    This module combines all the boilerplate implementations
    of fmt::Display for keys and error types.
*/

use crate::{
    address::AddressErr,
    bip39::MnemonicErr,
    encoding::base58::Base58Error,
    encoding::bech32::Bech32Err,
    hdwallet::HDWError,
    key,
    script::ScriptErr,
    taproot::TaprootErr
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for key::PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[private key]")
    }
}

impl fmt::Display for key::PubKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl fmt::Display for key::SchnorrPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl fmt::Display for key::KeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::BadSlice() => "invalid key bytes".to_string(),
            Self::BadArithmetic() => "tweak arithmetic left the scalar or point range".to_string(),
            Self::BadWif() => "invalid wallet import format string".to_string(),
            Self::BadString() => "invalid key string".to_string()
        };

        write!(f, "{}", val)
    }
}

/*
    bip39 module impls
*/
impl fmt::Display for MnemonicErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::EmptyPhrase() => "empty mnemonic phrase".to_string(),
            Self::InvalidWordCount(x) => format!("expected 12, 15, 18, 21 or 24 words, found {}", x)
        };

        write!(f, "{}", val)
    }
}

/*
    hdwallet module impls
*/
impl fmt::Display for HDWError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::InvalidSeedLength(x) => format!("expected between 16 and 64 seed bytes, found {}", x),
            Self::InvalidKeyMaterial() => "key material is zero or past the curve order".to_string(),
            Self::CantHarden() => "cannot produce a hardened child from a public key".to_string(),
            Self::IndexTooLarge(x) => format!("index {} does not fit the index space", x),
            Self::IndexReserved(x) => format!("index {} is reserved for hardened children", x),
            Self::InvalidChecksum() => "checksum does not match payload".to_string(),
            Self::InvalidLength(x) => format!("expected 82 bytes of serialized key, found {}", x),
            Self::UnknownVersionBytes(x) => format!("unrecognized version bytes {:02x?}", x),
            Self::BadChar(x) => format!("invalid character at index {}", x),
            Self::BadPath(x) => format!("cannot parse derivation path \"{}\"", x),
            Self::AddressEncoding(x) => format!("address encoding failed: {}", x)
        };

        write!(f, "{}", val)
    }
}

/*
    encoding module impls
*/
impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::BadChar(x) => format!("invalid base58 character at index {}", x),
            Self::BadChecksum() => "checksum does not match payload".to_string(),
            Self::BadLength(x) => format!("payload of {} bytes cannot be check decoded", x)
        };

        write!(f, "{}", val)
    }
}

impl fmt::Display for Bech32Err {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::BadVersion(x) => format!("witness version {} is out of range", x),
            Self::BadHrp(x) => format!("unknown human readable part \"{}\"", x),
            Self::CannotEncode() => "data cannot be bech32 encoded".to_string(),
            Self::CannotDecode() => "string is not a valid segwit address".to_string(),
            Self::InvalidLength(x) => format!("witness program of {} bytes is out of range", x)
        };

        write!(f, "{}", val)
    }
}

/*
    script and address module impls
*/
impl fmt::Display for ScriptErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::BadVersion(x) => format!("witness version {} is out of range", x),
            Self::BadProgramLength(x) => format!("witness program of {} bytes is out of range", x)
        };

        write!(f, "{}", val)
    }
}

impl fmt::Display for AddressErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bech32(x) => write!(f, "{}", x),
            Self::Script(x) => write!(f, "{}", x),
            Self::Taproot(x) => write!(f, "{}", x)
        }
    }
}

/*
    taproot module impls
*/
impl fmt::Display for TaprootErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::InvalidTweak => "tweak is not below the curve order",
            Self::PointAtInfinity => "tweaked key is the point at infinity"
        };

        write!(f, "{}", val)
    }
}
