/*
    This module implements the extended keys used in BIP32
    hierarchical deterministic key trees.

    An extended key is the key material plus the 32 byte chaincode
    that decorrelates sibling keys, along with the metadata needed
    to serialize it: depth, parent fingerprint and child number.
*/

use crate::{
    address::{
        Address,
        AddressErr
    },
    bip39::Mnemonic,
    encoding::{
        base58::Base58,
        base58::Base58Error,
        version_prefix::VersionPrefix
    },
    hash,
    hdwallet::{
        ckd::{
            derive_xprv,
            derive_xpub,
            ChildOptions
        },
        HDWError,
        Path,
        WalletType
    },
    key::{
        Key,
        PrivKey,
        PubKey
    },
    script::RedeemScript,
    util::{
        as_u32_be,
        try_into
    },
    util::Network
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xprv {
    key: PrivKey,
    chaincode: [u8; 32],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub index: [u8; 4]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xpub {
    key: PubKey,
    chaincode: [u8; 32],
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub index: [u8; 4]
}

pub trait ExtendedKey<T> where T: Key {
    /**
        Constructs the extended key from key material, chaincode and
        serialization metadata.
    */
    fn construct(key: T, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: [u8; 4]) -> Self
    where Self: Sized;

    /**
        Import a extended key from a string.
        "xprv[...]" or "xpub[...]"
    */
    fn from_str(key: &str) -> Result<Self, HDWError>
    where Self: Sized;

    /**
        Returns the key part of the extended key.
        32 bytes for private keys, 33 bytes for public keys.
    */
    fn key<const N: usize>(&self) -> [u8; N];

    /**
        Returns the chaincode of the extended key
    */
    fn chaincode(&self) -> [u8; 32];

    /**
        Serialize the extended key with the selected version prefix
    */
    fn serialize(&self, v_prefix: &VersionPrefix) -> String;

    /**
        Derives the child key of self
    */
    fn get_xchild(&self, options: ChildOptions) -> Result<Self, HDWError>
    where Self: Sized;

    /**
        Return the non extended public key of self.
    */
    fn get_pub(&self) -> PubKey;

    /**
        The first four bytes of Hash160 of the public key, stored as
        parent_fingerprint in every child of self.
    */
    fn fingerprint(&self) -> [u8; 4] {
        try_into(self.get_pub().hash160()[0..4].to_vec())
    }

    /**
        Converts an extended key to an address of the given script type.
    */
    fn get_address(&self, r#type: &WalletType, network: Network) -> Result<String, AddressErr> {
        match r#type {
            WalletType::P2PKH => Address::P2PKH(self.get_pub(), network).to_string(),
            WalletType::P2SH_P2WPKH => {
                let script = RedeemScript::p2wpkh(&self.get_pub());
                Address::P2SH_P2WPKH(script, network).to_string()
            },
            WalletType::P2WPKH => Address::P2WPKH(self.get_pub(), network).to_string(),
            WalletType::P2TR => {
                //The encoder tweaks the internal key with no script tree
                Address::P2TR(self.get_pub().schnorr(), network).to_string()
            }
        }
    }

    /**
        Derive the key at the given path from self.
    */
    fn derive_from_path(&self, path: &Path) -> Result<Self, HDWError>
    where Self: Sized + Clone
    {
        let mut current_key: Self = self.clone();
        for child in path.children.iter() {
            current_key = current_key.get_xchild(*child)?;
        }

        Ok(current_key)
    }
}

impl Xprv {
    /**
        Generates the master extended private key from a seed.

        The left half of HMAC-SHA512 keyed with "Bitcoin seed" becomes
        the master secret key, the right half the master chaincode.
    */
    pub fn from_seed(seed: &[u8]) -> Result<Xprv, HDWError> {
        //BIP32 admits seeds between 128 and 512 bits
        if seed.len() < 16 || seed.len() > 64 {
            return Err(HDWError::InvalidSeedLength(seed.len()))
        }

        let hash: [u8; 64] = hash::hmac_sha512(seed, b"Bitcoin seed");

        //The left bytes falling on zero or past the curve order makes the
        //seed unusable. Checked here even though the odds are negligible.
        let key = PrivKey::from_slice(&hash[0..32])
            .map_err(|_| HDWError::InvalidKeyMaterial())?;

        Ok(Xprv::construct(
            key,
            try_into(hash[32..64].to_vec()),
            0x00,
            [0x00; 4],
            [0x00; 4]
        ))
    }

    /**
        Convert a mnemonic to a master extended private key.
    */
    pub fn from_mnemonic(mnemonic: &Mnemonic) -> Result<Xprv, HDWError> {
        Self::from_seed(&mnemonic.seed())
    }

    /**
        Return the private key part of self
    */
    pub fn get_prv(&self) -> PrivKey {
        self.key
    }

    /**
        Find the corresponding xpub for self.

        The other direction does not exist: a public key cannot yield
        the private key that produced it.
    */
    pub fn get_xpub(&self) -> Xpub {
        Xpub::construct(
            PubKey::from_priv_key(&self.key),
            self.chaincode,
            self.depth,
            self.parent_fingerprint,
            self.index
        )
    }
}

impl ExtendedKey<PrivKey> for Xprv {
    fn construct(key: PrivKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: [u8; 4]) -> Self {
        Self {
            key,
            chaincode,
            //Serialisation info
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    fn from_str(key: &str) -> Result<Self, HDWError> {
        let bytes = decode_extended(key, true)?;

        //Extract the remaining data from the payload
        let depth: u8 = bytes[4];
        let fingerprint: [u8; 4] = try_into(bytes[5..9].to_vec());
        let index: [u8; 4] = try_into(bytes[9..13].to_vec());
        let chaincode: [u8; 32] = try_into(bytes[13..45].to_vec());

        //Private key data has to carry the leading zero pad byte
        if bytes[45] != 0x00 { return Err(HDWError::InvalidKeyMaterial()) }
        let key = PrivKey::from_slice(&bytes[46..78])
            .map_err(|_| HDWError::InvalidKeyMaterial())?;

        Ok(Self::construct(
            key,
            chaincode,
            depth,
            fingerprint,
            index
        ))
    }

    /**
        32 bytes (No indicator)
    */
    fn key<const N: usize>(&self) -> [u8; N] {
        self.key.as_bytes::<N>()
    }

    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn serialize(&self, v_prefix: &VersionPrefix) -> String {
        let mut payload: Vec<u8> = vec![];
        payload.push(self.depth);                           //depth
        payload.extend_from_slice(&self.parent_fingerprint); //fingerprint
        payload.extend_from_slice(&self.index);              //child number
        payload.extend_from_slice(&self.chaincode());        //chaincode
        payload.push(0x00);                                  //private key pad
        payload.extend_from_slice(&self.key::<32>());        //private key

        Base58::new(Some(*v_prefix), &payload).check_encode()
    }

    fn get_xchild(&self, options: ChildOptions) -> Result<Xprv, HDWError> {
        derive_xprv(self, options)
    }

    fn get_pub(&self) -> PubKey {
        PubKey::from_priv_key(&self.key)
    }
}

impl ExtendedKey<PubKey> for Xpub {
    fn construct(key: PubKey, chaincode: [u8; 32], depth: u8, pf: [u8; 4], index: [u8; 4]) -> Self {
        Self {
            key,
            chaincode,
            //Serialisation info
            depth,
            parent_fingerprint: pf,
            index
        }
    }

    fn from_str(key: &str) -> Result<Self, HDWError> {
        let bytes = decode_extended(key, false)?;

        //Extract the remaining data from the payload
        let depth: u8 = bytes[4];
        let fingerprint: [u8; 4] = try_into(bytes[5..9].to_vec());
        let index: [u8; 4] = try_into(bytes[9..13].to_vec());
        let chaincode: [u8; 32] = try_into(bytes[13..45].to_vec());
        let key = PubKey::from_slice(&bytes[45..78])
            .map_err(|_| HDWError::InvalidKeyMaterial())?;

        Ok(Self::construct(
            key,
            chaincode,
            depth,
            fingerprint,
            index
        ))
    }

    /**
        33 bytes (compressed point)
    */
    fn key<const N: usize>(&self) -> [u8; N] {
        self.key.as_bytes::<N>()
    }

    fn chaincode(&self) -> [u8; 32] {
        self.chaincode
    }

    fn serialize(&self, v_prefix: &VersionPrefix) -> String {
        let mut payload: Vec<u8> = vec![];
        payload.push(self.depth);                           //depth
        payload.extend_from_slice(&self.parent_fingerprint); //fingerprint
        payload.extend_from_slice(&self.index);              //child number
        payload.extend_from_slice(&self.chaincode());        //chaincode
        payload.extend_from_slice(&self.key::<33>());        //public key

        Base58::new(Some(*v_prefix), &payload).check_encode()
    }

    fn get_xchild(&self, options: ChildOptions) -> Result<Xpub, HDWError> {
        derive_xpub(self, options)
    }

    fn get_pub(&self) -> PubKey {
        self.key
    }
}

//Shared import path: base58 decode, length and checksum validation and
//version prefix classification.
fn decode_extended(key: &str, private: bool) -> Result<Vec<u8>, HDWError> {
    let bytes = Base58::decode(key).map_err(|x| match x {
        Base58Error::BadChar(i) => HDWError::BadChar(i),
        _ => HDWError::InvalidLength(0)
    })?;

    //Serialized extended keys are 82 bytes: 78 byte payload | 4 byte checksum
    if bytes.len() != 82 { return Err(HDWError::InvalidLength(bytes.len())) }

    match Base58::validate_checksum(key) {
        Ok(true) => { /* Continue */ },
        _ => return Err(HDWError::InvalidChecksum())
    }

    //Check the version bytes belong to the expected key class
    let version: u32 = as_u32_be(&try_into(bytes[0..4].to_vec()));
    let class_matches = match VersionPrefix::from_int(version) {
        Ok(x) if private => x.is_private_extended(),
        Ok(x) => x.is_public_extended(),
        Err(_) => false
    };
    if !class_matches {
        return Err(HDWError::UnknownVersionBytes(bytes[0..4].to_vec()))
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entropy,
        util::decode_02x,
        util::encode_02x
    };

    //Data generated on learnmeabitcoin.com/technical/hd-wallets
    const TEST_MNEMONIC: &str = "glow laugh acquire menu anchor evil occur put hover renew calm purpose";
    const TEST_MPRIV: &str = "081549973bafbba825b31bcc402a3c4ed8e3185c2f3a31c75e55f423e9629aa3";
    const TEST_MCC: &str = "1d7d2a4c940be028b945302ad79dd2ce2afe5ed55e1a2937a5af57f8401e73dd";

    //BIP32 test vector 1
    const TV1_SEED: &str = "000102030405060708090a0b0c0d0e0f";
    const TV1_XPRV: &str = "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPzpM1DhncMMt8KC5YxYwYWLS3gB5mXqdBFAywmzfPt7P9tQZBkCRhVGr";
    const TV1_XPUB: &str = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";

    fn test_master() -> Xprv {
        let mnemonic = Mnemonic::from_phrase(TEST_MNEMONIC, "").unwrap();
        Xprv::from_mnemonic(&mnemonic).unwrap()
    }

    #[test]
    fn master_key_from_mnemonic() {
        let master = test_master();

        //Test if the calculated and expected key and chaincode are equal
        assert_eq!(decode_02x(TEST_MPRIV), master.key::<32>());
        assert_eq!(decode_02x(TEST_MCC), master.chaincode());
        assert_eq!(master.depth, 0);
        assert_eq!(master.parent_fingerprint, [0x00; 4]);
        assert_eq!(master.index, [0x00; 4]);
    }

    #[test]
    fn bip32_vector_1_master_keys() {
        let master = Xprv::from_seed(&decode_02x(TV1_SEED)).unwrap();

        assert_eq!(master.serialize(&VersionPrefix::Xprv), TV1_XPRV);
        assert_eq!(master.get_xpub().serialize(&VersionPrefix::Xpub), TV1_XPUB);
    }

    #[test]
    fn rejects_out_of_range_seeds() {
        assert_eq!(Xprv::from_seed(&[0x00; 8]), Err(HDWError::InvalidSeedLength(8)));
        assert_eq!(Xprv::from_seed(&[0x00; 65]), Err(HDWError::InvalidSeedLength(65)));
    }

    #[test]
    fn serialize_extended_keys() {
        let master = test_master();

        //master xprv serialization test
        assert_eq!(master.serialize(&VersionPrefix::Xprv),
        "xprv9s21ZrQH143K2MPKHPWh91wRxLKehoCNsRrwizj2xNaj9zD5SHMNiHJesDEYgJAavgNE1fDWLgYNneHeSA8oVeVXVYomhP1wxdzZtKsLJbc".to_string()
        );

        //master xpub serialization test
        assert_eq!(master.get_xpub().serialize(&VersionPrefix::Xpub),
        "xpub661MyMwAqRbcEqTnPR3hW9tAWNA97FvEEenYXP8eWi7i2nYDypfdG5d8iWfK8YgesKi2EE5mk9THcTqnveDWwZVMuctjmxeEaUKgtg7CEEc".to_string()
        );
    }

    #[test]
    fn decode_inverts_encode_for_every_seed_length() -> Result<(), HDWError> {
        for size in [16, 20, 24, 32, 64] {
            let master = Xprv::from_seed(&entropy::random_bytes(size)).unwrap();

            let decoded = Xprv::from_str(&master.serialize(&VersionPrefix::Xprv))?;
            assert_eq!(decoded, master);

            let xpub = master.get_xpub();
            let decoded = Xpub::from_str(&xpub.serialize(&VersionPrefix::Xpub))?;
            assert_eq!(decoded, xpub);
        }

        Ok(())
    }

    #[test]
    fn create_xkeys_from_str() {
        //XPRV
        let test_data: Vec<&str> = vec![
            "xprv9s21ZrQH143K2MPKHPWh91wRxLKehoCNsRrwizj2xNaj9zD5SHMNiHJesDEYgJAavgNE1fDWLgYNneHeSA8oVeVXVYomhP1wxdzZtKsLJbc",
            "this is definately not a extended private key",
            "xpub661MyMwAqRbcEqTnPR3hW9tAWNA97FvEEenYXP8eWi7i2nYDypfdG5d8iWfK8YgesKi2EE5mk9THcTqnveDWwZVMuctjmxeEaUKgtg7CEEc"
        ];
        let expected_results: Vec<bool> = vec![
            true,
            false,
            false
        ];
        for i in 0..test_data.len() {
            assert_eq!(Xprv::from_str(test_data[i]).is_ok(), expected_results[i]);
        }

        //XPUB
        let test_data: Vec<&str> = vec![
            "xpub661MyMwAqRbcEqTnPR3hW9tAWNA97FvEEenYXP8eWi7i2nYDypfdG5d8iWfK8YgesKi2EE5mk9THcTqnveDWwZVMuctjmxeEaUKgtg7CEEc",
            "this is definately not a extended private key",
            "xprv661MyMwAqRbcEqTnPR3hW9tAWNA97FvEEenYXP8eWi7i2nYDypfdG5d8iWfK8YgesKi2EE5mk9THcTqnveDWwZVMuctjmxeEaUKgtg7CEEc"
        ];
        let expected_results: Vec<bool> = vec![
            true,
            false,
            false
        ];
        for i in 0..test_data.len() {
            assert_eq!(Xpub::from_str(test_data[i]).is_ok(), expected_results[i]);
        }
    }

    #[test]
    fn single_character_corruption_never_decodes() {
        let encoded = test_master().serialize(&VersionPrefix::Xprv);

        for i in 0..encoded.len() {
            let mut corrupted: Vec<char> = encoded.chars().collect();
            corrupted[i] = if corrupted[i] == '2' { '3' } else { '2' };
            let corrupted: String = corrupted.into_iter().collect();

            assert!(Xprv::from_str(&corrupted).is_err());
        }
    }

    #[test]
    fn version_bytes_are_configurable() -> Result<(), HDWError> {
        let master = test_master();

        //The same key material serialized under BIP84 and plain BIP32
        //version bytes decodes identically.
        let as_zprv = master.serialize(&VersionPrefix::Zprv);
        let as_xprv = master.serialize(&VersionPrefix::Xprv);
        assert_ne!(as_zprv, as_xprv);

        assert_eq!(Xprv::from_str(&as_zprv)?, Xprv::from_str(&as_xprv)?);

        Ok(())
    }

    #[test]
    fn derive_from_path_tests() -> Result<(), HDWError> {
        let master = test_master();
        let path: Path = Path::from_str("m/44'/0'/0'/0")?;

        let derived = master.derive_from_path(&path)?;
        assert_eq!(
            derived.serialize(&VersionPrefix::Xprv),
            "xprvA2RVpXN1QL4okLkV3NT6ADt7UcqauZdi6Tyv2wBscQ3kq9zvvfsxBBgQTcoj7GZCa7wkmmeLvQHdqVJEQ1D4PGoDgYV8CZj9w9jqGNbGCaT"
        );
        assert_eq!(
            derived.get_xpub().serialize(&VersionPrefix::Xpub),
            "xpub6FQrE2tuEhd6xppx9Pz6XMpr2eg5K2MZTguWqKbVAjajhxL5UDCCiyztJtCFDrAqPoQfmbVeVX5BKXQ7vxgR42DtsVa3g2YMLZQjbEnxbqi"
        );

        Ok(())
    }

    #[test]
    fn bip32_vector_1_deep_chain() -> Result<(), HDWError> {
        let master = Xprv::from_seed(&decode_02x(TV1_SEED)).unwrap();

        //Test vector 1, chain m/0'/1
        let path = Path::from_str("m/0'/1")?;
        assert_eq!(
            master.derive_from_path(&path)?.serialize(&VersionPrefix::Xprv),
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
        );

        //Test vector 1, chain m/0'/1/2'/2/1000000000
        let path = Path::from_str("m/0'/1/2'/2/1000000000")?;
        assert_eq!(
            master.derive_from_path(&path)?.serialize(&VersionPrefix::Xprv),
            "xprvA41z7zogVVwxVSgdKUHDy1SKmdb533PjDz7J6N6mV6uS3ze1ai8FHa8kmHScGpWmj4WggLyQjgPie1rFSruoUihUZREPSL39UNdE3BBDu76"
        );

        Ok(())
    }

    #[test]
    fn fingerprint_matches_hash_of_public_key() {
        let master = test_master();

        assert_eq!(
            master.fingerprint(),
            master.get_xpub().fingerprint()
        );
        assert_eq!(
            encode_02x(&master.fingerprint()),
            encode_02x(&master.get_pub().hash160()[0..4])
        );
    }
}
