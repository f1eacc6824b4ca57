/*
    Base58 and Base58Check encoding, built on the bs58 alphabet
    implementation with the double sha256 checksum layered here.
*/

use crate::{
    encoding::{
        version_prefix::VersionPrefix
    },
    hash
};

#[derive(Debug)]
pub struct Base58 {
    prefix: Option<VersionPrefix>,
    payload: Vec<u8>
}

#[derive(Debug, Clone, PartialEq)]
pub enum Base58Error {
    BadChar(usize),
    BadChecksum(),
    BadLength(usize)
}

impl Base58 {
    pub fn new(prefix: Option<VersionPrefix>, payload: &[u8]) -> Base58 {
        Base58 {
            prefix,
            payload: payload.to_vec()
        }
    }

    /// Encode data in base58 format.
    pub fn encode(self) -> String {
        bs58::encode(self.assemble()).into_string()
    }

    /// Check encode data by appending the checksum and then encoding it.
    pub fn check_encode(self) -> String {
        let mut bytes = self.assemble();
        let checksum = hash::sha256d(&bytes);
        bytes.extend_from_slice(&checksum[0..4]);

        bs58::encode(bytes).into_string()
    }

    //Concatenate the prefix and payload
    fn assemble(self) -> Vec<u8> {
        match self.prefix {
            Some(x) => {
                let mut data = x.to_bytes();
                data.extend_from_slice(&self.payload);
                data
            },
            None => self.payload
        }
    }

    /// Decodes a base58 string into a byte vector.
    /// DOES NOT remove the checksum or version prefix if present.
    pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        bs58::decode(encoded).into_vec().map_err(|x| match x {
            bs58::decode::Error::InvalidCharacter { index, .. } => Base58Error::BadChar(index),
            bs58::decode::Error::NonAsciiCharacter { index } => Base58Error::BadChar(index),
            _ => Base58Error::BadLength(encoded.len())
        })
    }

    /// Checks if a base58 check encoded string carries a valid checksum
    pub fn validate_checksum(encoded: &str) -> Result<bool, Base58Error> {
        let bytes = Base58::decode(encoded)?;
        if bytes.len() < 4 { return Err(Base58Error::BadLength(bytes.len())) }

        //Check derived_checksum == extracted_checksum
        Ok(hash::sha256d(&bytes[..bytes.len()-4])[0..4] == bytes[bytes.len()-4..])
    }

    /// Returns the decoded payload with the checksum removed.
    /// Version prefix is NOT removed as it is variable length depending on context.
    pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
        if !Self::validate_checksum(encoded)? { return Err(Base58Error::BadChecksum()) }

        let bytes = Base58::decode(encoded)?;
        Ok(bytes[..bytes.len()-4].to_vec())
    }
}
