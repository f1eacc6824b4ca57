/*
    Keys module wrapping the secp256k1 curve library.

    Scalars are private keys, points are public keys. Everything
    the rest of the library needs from the curve goes through here:
    base point multiplication, scalar and point tweak addition,
    point compression and x-only key extraction.
*/

use crate::{
    Secp256k1,
    SecretKey,
    PublicKey,
    XOnlyPublicKey,
    Scalar,
    OsRng,
    encoding::base58::Base58,
    encoding::version_prefix::VersionPrefix,
    hash,
    taproot::TaprootErr,
    taproot::TapTweakHash,
    util::decode_02x,
    util::encode_02x,
    util::try_into,
    util::Network
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyError {
    BadSlice(),
    BadArithmetic(),
    BadWif(),
    BadString()
}

/**
    Common interface of the key types. The const parameter is the
    serialized length: 32 for private keys and x-only public keys,
    33 for compressed public keys.
*/
pub trait Key {
    fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError>
    where Self: Sized;

    fn as_bytes<const N: usize>(&self) -> [u8; N];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrivKey(SecretKey);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PubKey(PublicKey);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchnorrPublicKey(XOnlyPublicKey);

impl Key for PrivKey {
    fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        //Rejects slices that are not 32 bytes as well as the zero
        //scalar and scalars not below the curve order.
        match SecretKey::from_slice(byte_array) {
            Ok(x) => Ok(Self(x)),
            Err(_) => Err(KeyError::BadSlice())
        }
    }

    fn as_bytes<const N: usize>(&self) -> [u8; N] {
        try_into(self.0.secret_bytes().to_vec())
    }
}

impl PrivKey {
    /**
        Generates a random private key from OS entropy.
    */
    pub fn new_rand() -> Self {
        Self(SecretKey::new(&mut OsRng))
    }

    /**
        Adds a scalar to self modulo the curve order.

        Fails if the tweak is not below the curve order or if the
        sum is the zero scalar.
    */
    pub fn add_assign(&mut self, tweak: &[u8; 32]) -> Result<(), KeyError> {
        let scalar = match Scalar::from_be_bytes(*tweak) {
            Ok(x) => x,
            Err(_) => return Err(KeyError::BadArithmetic())
        };
        self.0 = self.0.add_tweak(&scalar).map_err(|_| KeyError::BadArithmetic())?;

        Ok(())
    }

    /**
        Export the private key in wallet-import-format (Base58Check with
        network prefix). The compression parameter appends the marker byte
        indicating the corresponding public key is to be used compressed.
    */
    pub fn export_as_wif(&self, compressed: bool, network: Network) -> String {
        let mut key: Vec<u8> = self.as_bytes::<32>().to_vec();
        if compressed {
            key.push(0x01);
        }

        let prefix = match network {
            Network::Bitcoin => VersionPrefix::PrivateKeyWIF,
            Network::Testnet => VersionPrefix::TestNetPrivateKeyWIF
        };

        Base58::new(Some(prefix), &key).check_encode()
    }

    /**
        Import a private key from a wallet-import-format string.
    */
    pub fn from_wif(wif: &str) -> Result<Self, KeyError> {
        let bytes = Base58::check_decode(wif).map_err(|_| KeyError::BadWif())?;

        //Prefix byte | 32 key bytes | optional compression marker
        match bytes.len() {
            33 => { /* uncompressed */ },
            34 => {
                if bytes[33] != 0x01 { return Err(KeyError::BadWif()) }
            },
            _ => return Err(KeyError::BadWif())
        }
        match bytes[0] {
            0x80 | 0xef => { /* mainnet or testnet prefix */ },
            _ => return Err(KeyError::BadWif())
        }

        Self::from_slice(&bytes[1..33]).map_err(|_| KeyError::BadWif())
    }
}

impl Key for PubKey {
    fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        match PublicKey::from_slice(byte_array) {
            Ok(x) => Ok(Self(x)),
            Err(_) => Err(KeyError::BadSlice())
        }
    }

    fn as_bytes<const N: usize>(&self) -> [u8; N] {
        try_into(self.0.serialize().to_vec())
    }
}

impl PubKey {
    /**
        Finds the compressed public key from a private key.

        Is the result of the base point G on the secp256k1 curve multiplied
        k times, where k is the private key.
    */
    pub fn from_priv_key(k: &PrivKey) -> Self {
        Self(PublicKey::from_secret_key(&Secp256k1::new(), &k.0))
    }

    /**
        Adds the point tweak*G to self.

        Fails if the tweak is not below the curve order or if the
        sum is the point at infinity.
    */
    pub fn add_exp_assign(&mut self, tweak: &[u8; 32]) -> Result<(), KeyError> {
        let scalar = match Scalar::from_be_bytes(*tweak) {
            Ok(x) => x,
            Err(_) => return Err(KeyError::BadArithmetic())
        };
        self.0 = self.0
            .add_exp_tweak(&Secp256k1::new(), &scalar)
            .map_err(|_| KeyError::BadArithmetic())?;

        Ok(())
    }

    /**
        Returns the uncompressed public key (both coordinates with the
        0x04 marker byte).
    */
    pub fn decompressed_bytes(&self) -> [u8; 65] {
        self.0.serialize_uncompressed()
    }

    /**
        Hash160 of the compressed public key, the payload of legacy
        and segwit v0 addresses.
    */
    pub fn hash160(&self) -> [u8; 20] {
        hash::hash160(&self.as_bytes::<33>())
    }

    /**
        Return the compressed public key as a hex string.
    */
    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes::<33>())
    }

    /**
        Drops the parity byte, leaving the x-only key used in taproot
        outputs.
    */
    pub fn schnorr(&self) -> SchnorrPublicKey {
        SchnorrPublicKey(self.0.x_only_public_key().0)
    }
}

impl Key for SchnorrPublicKey {
    fn from_slice(byte_array: &[u8]) -> Result<Self, KeyError> {
        match XOnlyPublicKey::from_slice(byte_array) {
            Ok(x) => Ok(Self(x)),
            Err(_) => Err(KeyError::BadSlice())
        }
    }

    fn as_bytes<const N: usize>(&self) -> [u8; N] {
        try_into(self.0.serialize().to_vec())
    }
}

impl SchnorrPublicKey {
    /**
        Import an x-only public key from a 64 character hex string.
    */
    pub fn from_str(hex: &str) -> Result<Self, KeyError> {
        if hex.len() != 64 || !hex.chars().all(|x| x.is_ascii_hexdigit()) {
            return Err(KeyError::BadString())
        }

        Self::from_slice(&decode_02x(hex))
    }

    /**
        Return the x-only public key as a hex string.
    */
    pub fn hex(&self) -> String {
        encode_02x(&self.as_bytes::<32>())
    }

    /**
        Tweaks self by the TapTweak tagged hash of itself and an optional
        script tree merkle root, returning the taproot output key.

        With no merkle root this commits to a key path only spend as
        recommended by BIP341.
    */
    pub fn tap_tweak(&self, merkle_root: Option<[u8; 32]>) -> Result<SchnorrPublicKey, TaprootErr> {
        let commitment = match merkle_root {
            Some(root) => root.to_vec(),
            None => vec![]
        };
        let t = TapTweakHash::from_key_and_tweak(self, commitment);

        //The tagged hash landing on or above the curve order is
        //astronomically unlikely but the standard requires the check.
        let scalar = match Scalar::from_be_bytes(t) {
            Ok(x) => x,
            Err(_) => return Err(TaprootErr::InvalidTweak)
        };

        let (tweaked, _parity) = self.0
            .add_tweak(&Secp256k1::new(), &scalar)
            .map_err(|_| TaprootErr::PointAtInfinity)?;

        Ok(Self(tweaked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //Private key 0x01 maps to the generator point
    const ONE_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";
    const GENERATOR: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn base_point_multiplication() -> Result<(), KeyError> {
        let k = PrivKey::from_slice(&decode_02x(ONE_KEY))?;
        assert_eq!(PubKey::from_priv_key(&k).hex(), GENERATOR);

        Ok(())
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        //Zero and the curve order are not valid private keys
        let zero = [0u8; 32];
        let order = decode_02x("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

        assert!(PrivKey::from_slice(&zero).is_err());
        assert!(PrivKey::from_slice(&order).is_err());
        assert!(PrivKey::from_slice(&[0x01; 16]).is_err());
    }

    #[test]
    fn tweak_addition_matches_on_both_sides() -> Result<(), KeyError> {
        //k*G + t*G must equal (k + t)*G
        let tweak = [0x42u8; 32];

        let mut k = PrivKey::new_rand();
        let mut point = PubKey::from_priv_key(&k);

        k.add_assign(&tweak)?;
        point.add_exp_assign(&tweak)?;

        assert_eq!(PubKey::from_priv_key(&k), point);

        Ok(())
    }

    #[test]
    fn wif_round_trip() -> Result<(), KeyError> {
        //Private key 0x01 in compressed mainnet WIF
        let wif = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
        let key = PrivKey::from_wif(wif)?;

        assert_eq!(key.as_bytes::<32>(), decode_02x(ONE_KEY)[..]);
        assert_eq!(key.export_as_wif(true, Network::Bitcoin), wif);

        Ok(())
    }

    #[test]
    fn wif_rejects_corruption() {
        assert!(PrivKey::from_wif("KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWm").is_err());
        assert!(PrivKey::from_wif("definitely not a wif").is_err());
    }

    #[test]
    fn schnorr_key_hex_round_trip() -> Result<(), KeyError> {
        let hex = "cc8a4bc64d897bddc5fbc2f670f7a8ba0b386779106cf1223c6fc5d7cd6fc115";
        let key = SchnorrPublicKey::from_str(hex)?;

        assert_eq!(key.hex(), hex);
        assert!(SchnorrPublicKey::from_str("too short").is_err());

        Ok(())
    }

    #[test]
    fn x_only_drops_parity() {
        let k = PrivKey::new_rand();
        let pk = PubKey::from_priv_key(&k);

        assert_eq!(pk.schnorr().as_bytes::<32>(), pk.as_bytes::<33>()[1..]);
    }
}
