/*
    Address encoding for the four script types the BIP44 family of
    account layouts pays to.

    Each variant owns the key or script material it encodes and the
    network selecting the version byte or human readable prefix.
*/

use crate::{
    encoding::base58::Base58,
    encoding::bech32::Bech32Err,
    encoding::version_prefix::VersionPrefix,
    key::Key,
    key::PubKey,
    key::SchnorrPublicKey,
    script::RedeemScript,
    script::ScriptErr,
    script::WitnessProgram,
    taproot,
    taproot::TaprootErr,
    util::Network
};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    P2PKH(PubKey, Network),
    P2SH_P2WPKH(RedeemScript, Network),
    P2WPKH(PubKey, Network),
    P2TR(SchnorrPublicKey, Network)
}

#[derive(Debug, Clone, PartialEq)]
pub enum AddressErr {
    Bech32(Bech32Err),
    Script(ScriptErr),
    Taproot(TaprootErr)
}

impl Address {
    /**
        Encodes self as an address string.

        * P2PKH: Base58Check( version | Hash160(pubkey) )
        * P2SH-P2WPKH: Base58Check( version | Hash160(redeem script) )
        * P2WPKH: bech32, witness version 0, program Hash160(pubkey)
        * P2TR: bech32m, witness version 1, program x-only tweaked output key
    */
    pub fn to_string(&self) -> Result<String, AddressErr> {
        match self {
            Address::P2PKH(key, network) => {
                let prefix = match network {
                    Network::Bitcoin => VersionPrefix::BTCAddress,
                    Network::Testnet => VersionPrefix::BTCTestNetAddress
                };

                Ok(Base58::new(Some(prefix), &key.hash160()).check_encode())
            },
            Address::P2SH_P2WPKH(script, network) => {
                let prefix = match network {
                    Network::Bitcoin => VersionPrefix::P2ScriptAddress,
                    Network::Testnet => VersionPrefix::TestnetP2SHAddress
                };

                Ok(Base58::new(Some(prefix), &script.hash()).check_encode())
            },
            Address::P2WPKH(key, network) => {
                let program = WitnessProgram::new(0, key.hash160().to_vec())
                    .map_err(AddressErr::Script)?;

                program.to_address(network).map_err(AddressErr::Bech32)
            },
            Address::P2TR(internal_key, network) => {
                //Tweaking with no script tree
                let output_key = taproot::taproot_output_key(internal_key, None)
                    .map_err(AddressErr::Taproot)?;
                let program = WitnessProgram::new(1, output_key.as_bytes::<32>().to_vec())
                    .map_err(AddressErr::Script)?;

                program.to_address(network).map_err(AddressErr::Bech32)
            }
        }
    }

    /**
        Verifies that a legacy address is valid by checking the payload
        length and checksum.
    */
    pub fn is_valid(address: &str) -> bool {
        let decoded: Vec<u8> = match Base58::decode(address) {
            Ok(x) => x,
            Err(_) => return false
        };
        //Version byte | 20 byte hash | 4 byte checksum
        if decoded.len() != 25 { return false }

        matches!(Base58::validate_checksum(address), Ok(true))
    }
}
