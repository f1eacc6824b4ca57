/*
    This module implements child key derivation from parent
    extended private and public keys under the BIP32 standard.

    Reference:
        https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki
*/

use crate::{
    hash::{
        hmac_sha512
    },
    hdwallet::{
        ExtendedKey, Xprv, Xpub,
        HDWError
    },
    key::{
        Key
    },
    util::try_into
};

/// Hardened child numbers occupy the upper half of the index space
const HARDENED_OFFSET: u32 = 1 << 31;

/**
    Enum to pattern match child key derivation options.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildOptions {
    Normal(u32),
    Hardened(u32)
}

/**
    Function to derive new child xprv keys from parent xprv keys.

    When the HMAC left bytes fall outside the curve order or produce
    the zero scalar, BIP32 prescribes skipping to the next index.
    That recovery happens here so siblings derived through this
    function always land on the same tree every caller sees.
*/
pub fn derive_xprv(parent: &Xprv, options: ChildOptions) -> Result<Xprv, HDWError> {
    let (mut index, hardened) = check_options(options)?;

    loop {
        //Hardened children commit to the parent private key, normal
        //children to the parent public key.
        let mut data: Vec<u8> = vec![];
        if hardened {
            data.push(0x00);
            data.extend_from_slice(&parent.key::<32>());
        } else {
            data.extend_from_slice(&parent.get_pub().as_bytes::<33>());
        }
        data.extend_from_slice(&index.to_be_bytes());

        //Hash the data with the parent chaincode as the key
        let hash: [u8; 64] = hmac_sha512(&data, &parent.chaincode());

        //Split the hash into two halves. The right half is the child chaincode.
        let left_bytes: [u8; 32] = try_into(hash[0..32].to_vec());
        let child_chaincode: [u8; 32] = try_into(hash[32..64].to_vec());

        //Child private key is the parent private key plus the left bytes,
        //modulo the curve order.
        let mut child_key = parent.get_prv();
        match child_key.add_assign(&left_bytes) {
            Ok(()) => {
                return Ok(Xprv::construct(
                    child_key,
                    child_chaincode,
                    parent.depth + 1,
                    parent.fingerprint(),
                    index.to_be_bytes()
                ))
            },
            //Left bytes not below the curve order or a zero child key.
            Err(_) => index = next_index(index, hardened)?
        }
    }
}

/**
    Function to derive new child xpub keys from parent xpub keys.

    Only non-hardened children exist for public parents. Invalid
    children are skipped with the same next-index rule as private
    derivation so the two trees stay in lockstep.
*/
pub fn derive_xpub(parent: &Xpub, options: ChildOptions) -> Result<Xpub, HDWError> {
    let (mut index, _) = match options {
        ChildOptions::Hardened(_) => return Err(HDWError::CantHarden()),
        ChildOptions::Normal(_) => check_options(options)?
    };

    loop {
        let mut data: Vec<u8> = parent.key::<33>().to_vec();
        data.extend_from_slice(&index.to_be_bytes());

        let hash: [u8; 64] = hmac_sha512(&data, &parent.chaincode());

        let left_bytes: [u8; 32] = try_into(hash[0..32].to_vec());
        let child_chaincode: [u8; 32] = try_into(hash[32..64].to_vec());

        //Child public key is the parent point plus the left bytes times
        //the base point.
        let mut child_key = parent.get_pub();
        match child_key.add_exp_assign(&left_bytes) {
            Ok(()) => {
                return Ok(Xpub::construct(
                    child_key,
                    child_chaincode,
                    parent.depth + 1,
                    parent.fingerprint(),
                    index.to_be_bytes()
                ))
            },
            //Left bytes not below the curve order or the point at infinity.
            Err(_) => index = next_index(index, false)?
        }
    }
}

//Validates the requested index and applies the hardened offset.
fn check_options(options: ChildOptions) -> Result<(u32, bool), HDWError> {
    match options {
        ChildOptions::Normal(x) => {
            //Indexes in the upper half are reserved for hardened keys
            if x >= HARDENED_OFFSET { return Err(HDWError::IndexReserved(x)) }
            Ok((x, false))
        },
        ChildOptions::Hardened(x) => {
            //The shifted index has to fit into 32 bits
            if x >= HARDENED_OFFSET { return Err(HDWError::IndexTooLarge(x)) }
            Ok((x + HARDENED_OFFSET, true))
        }
    }
}

//The next index to try after an invalid child, staying inside the
//hardened or normal half of the index space.
fn next_index(index: u32, hardened: bool) -> Result<u32, HDWError> {
    let next = index.checked_add(1).ok_or(HDWError::IndexTooLarge(index))?;
    if !hardened && next >= HARDENED_OFFSET {
        return Err(HDWError::IndexTooLarge(index))
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy;
    use crate::encoding::version_prefix::VersionPrefix;

    fn random_master() -> Xprv {
        Xprv::from_seed(&entropy::random_bytes(32)).unwrap()
    }

    #[test]
    fn public_and_private_derivation_agree() -> Result<(), HDWError> {
        let master = random_master();

        for i in 0..5 {
            let from_private = derive_xprv(&master, ChildOptions::Normal(i))?.get_xpub();
            let from_public = derive_xpub(&master.get_xpub(), ChildOptions::Normal(i))?;

            assert_eq!(from_private.key::<33>(), from_public.key::<33>());
            assert_eq!(from_private.chaincode(), from_public.chaincode());
            assert_eq!(from_private.depth, from_public.depth);
            assert_eq!(from_private.parent_fingerprint, from_public.parent_fingerprint);
            assert_eq!(from_private.index, from_public.index);
        }

        Ok(())
    }

    #[test]
    fn hardened_derivation_needs_the_private_key() {
        let master = random_master();

        assert_eq!(
            derive_xpub(&master.get_xpub(), ChildOptions::Hardened(0)),
            Err(HDWError::CantHarden())
        );
    }

    #[test]
    fn hardened_and_normal_children_differ() -> Result<(), HDWError> {
        let master = random_master();

        let normal = derive_xprv(&master, ChildOptions::Normal(5))?;
        let hardened = derive_xprv(&master, ChildOptions::Hardened(5))?;

        assert_ne!(normal.key::<32>(), hardened.key::<32>());
        assert_ne!(normal.chaincode(), hardened.chaincode());
        assert_ne!(normal.index, hardened.index);

        Ok(())
    }

    #[test]
    fn reserved_and_oversized_indexes_are_rejected() {
        let master = random_master();

        assert_eq!(
            derive_xprv(&master, ChildOptions::Normal(HARDENED_OFFSET)),
            Err(HDWError::IndexReserved(HARDENED_OFFSET))
        );
        assert_eq!(
            derive_xprv(&master, ChildOptions::Hardened(HARDENED_OFFSET)),
            Err(HDWError::IndexTooLarge(HARDENED_OFFSET))
        );
    }

    #[test]
    fn hardened_bit_is_applied_to_the_child_number() -> Result<(), HDWError> {
        let master = random_master();

        let child = derive_xprv(&master, ChildOptions::Hardened(7))?;
        assert_eq!(child.index, (7u32 + HARDENED_OFFSET).to_be_bytes());

        let child = derive_xprv(&master, ChildOptions::Normal(7))?;
        assert_eq!(child.index, 7u32.to_be_bytes());

        Ok(())
    }

    #[test]
    fn bip32_vector_1_hardened_child() -> Result<(), HDWError> {
        //Test vector 1, chain m/0'
        let master = Xprv::from_seed(&crate::util::decode_02x("000102030405060708090a0b0c0d0e0f")).unwrap();
        let child = derive_xprv(&master, ChildOptions::Hardened(0))?;

        assert_eq!(
            child.serialize(&VersionPrefix::Xprv),
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
        );
        assert_eq!(
            child.get_xpub().serialize(&VersionPrefix::Xpub),
            "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw"
        );

        Ok(())
    }
}
