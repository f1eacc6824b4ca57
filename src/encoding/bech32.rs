/*
    Module implements segwit address encoding under BIP173 (bech32)
    and BIP350 (bech32m).

    The witness version is carried as the first 5-bit group, followed
    by the witness program regrouped from 8 to 5 bit values. Version 0
    programs checksum with bech32, higher versions with bech32m.
*/

use crate::util::Network;

use bech32::{
    u5,
    FromBase32,
    ToBase32,
    Variant
};

#[derive(Debug, Clone, PartialEq)]
pub enum Bech32Err {
    BadVersion(u8),
    BadHrp(String),
    CannotEncode(),
    CannotDecode(),
    InvalidLength(usize)
}

/**
    Takes in a witness version and witness program and encodes it as
    a segwit address for the given network.

    The program is either a pubkey hash (p2wpkh) or an x-only output
    key (taproot). Use witness version 0 for P2WPKH and version 1 for P2TR.
*/
pub fn encode(witness_version: u8, program: &[u8], network: &Network) -> Result<String, Bech32Err> {
    if witness_version > 16 { return Err(Bech32Err::BadVersion(witness_version)) }

    let variant = match witness_version {
        0 => Variant::Bech32,
        _ => Variant::Bech32m
    };

    let mut data = vec![
        u5::try_from_u8(witness_version).map_err(|_| Bech32Err::BadVersion(witness_version))?
    ];
    data.extend(program.to_base32());

    bech32::encode(network.hrp(), data, variant).map_err(|_| Bech32Err::CannotEncode())
}

/**
    Decodes a segwit address into its human readable part, witness
    version and witness program.

    Enforces the BIP350 rule that version 0 programs use the bech32
    checksum and higher versions use bech32m.
*/
pub fn decode(address: &str) -> Result<(String, u8, Vec<u8>), Bech32Err> {
    let (hrp, data, variant) = bech32::decode(address).map_err(|_| Bech32Err::CannotDecode())?;
    if data.is_empty() { return Err(Bech32Err::InvalidLength(0)) }

    let witness_version = data[0].to_u8();
    match (witness_version, variant) {
        (0, Variant::Bech32) | (1..=16, Variant::Bech32m) => { /* Continue */ },
        _ => return Err(Bech32Err::CannotDecode())
    }

    let program = Vec::<u8>::from_base32(&data[1..]).map_err(|_| Bech32Err::CannotDecode())?;
    if program.len() < 2 || program.len() > 40 { return Err(Bech32Err::InvalidLength(program.len())) }

    Ok((hrp, witness_version, program))
}
