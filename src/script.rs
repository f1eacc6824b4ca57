/*
    Minimal script handling for address encoding: the redeem script
    that nests a P2WPKH spend inside P2SH, and the witness program
    payload of native segwit outputs.
*/

use crate::{
    encoding::bech32,
    encoding::bech32::Bech32Err,
    hash,
    key::Key,
    key::PubKey,
    util::Network
};

#[derive(Debug, Clone, PartialEq)]
pub struct RedeemScript {
    pub code: Vec<u8>
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptErr {
    BadVersion(u8),
    BadProgramLength(usize)
}

impl RedeemScript {
    /**
        Create a new instance of self
    */
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            code
        }
    }

    /**
        Hash the script with Hash160
    */
    pub fn hash(&self) -> [u8; 20] {
        hash::hash160(&self.code)
    }

    /// Redeem script nesting a P2WPKH spend inside P2SH (BIP49):
    /// OP_0 OP_PUSHBYTES_20 <Hash160(pubkey)>
    pub fn p2wpkh(pubkey: &PubKey) -> Self {
        let hash = hash::hash160(&pubkey.as_bytes::<33>());

        let mut code: Vec<u8> = vec![0x00, 0x14];
        code.extend_from_slice(&hash);
        Self::new(code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WitnessProgram {
    pub version: u8,
    pub program: Vec<u8>
}

impl WitnessProgram {
    /**
        Creates a new witness program given a version and data.

        For P2WPKH, version is 0 and data is the Hash160 of the public key.
        For P2TR, version is 1 and data is the x-only output key.
    */
    pub fn new(version: u8, data: Vec<u8>) -> Result<Self, ScriptErr> {
        if version > 16 { return Err(ScriptErr::BadVersion(version)) }
        if data.len() < 2 || data.len() > 40 { return Err(ScriptErr::BadProgramLength(data.len())) }

        Ok(Self {
            version,
            program: data
        })
    }

    /**
        Encode the witness program as a segwit address. Version 0
        programs use bech32, higher versions use bech32m.
    */
    pub fn to_address(&self, network: &Network) -> Result<String, Bech32Err> {
        bech32::encode(self.version, &self.program, network)
    }

    /**
        Decode a segwit address back into its witness program.
    */
    pub fn from_address(address: &str) -> Result<Self, Bech32Err> {
        let (hrp, version, program) = bech32::decode(address)?;
        match &hrp[..] {
            "bc" | "tb" => { /* Continue */ },
            _ => return Err(Bech32Err::BadHrp(hrp))
        }

        Ok(Self {
            version,
            program
        })
    }
}
