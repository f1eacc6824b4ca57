/*
    Hash module includes the digest and key stretching functions
    used in key derivation, serialization checksums and address
    encoding.
*/

use crate::{
    Digest, Hmac, Mac, Ripemd160, Sha256, Sha512,
    pbkdf2_hmac
};

type HmacSha512 = Hmac<Sha512>;

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut r = Sha256::new();
    r.update(input);
    r.finalize().into()
}

/*
    Takes in a byte array and returns the double sha256 hash of it
*/
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}

/*
    Takes in a byte array and returns the ripemd160 hash of it
*/
pub fn ripemd160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    let mut r = Ripemd160::new();
    r.update(input.as_ref());
    r.finalize().into()
}

/*
    Ripemd160(Sha256(input)), the public key and script hash used
    in legacy and segwit v0 addresses.
*/
pub fn hash160<T>(input: T) -> [u8; 20]
where T: AsRef<[u8]>
{
    ripemd160(sha256(input))
}

/**
    HMAC-SHA512 of the data under the given key.

    Used with the key "Bitcoin seed" for master key generation and
    with the parent chain code for child key derivation.
*/
pub fn hmac_sha512(data: &[u8], key: &[u8]) -> [u8; 64] {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(data);
    let mut result = [0u8; 64];
    result.copy_from_slice(&mac.finalize().into_bytes());
    result
}

/**
    PBKDF2 with HMAC-SHA512 as the PRF, producing the 64 byte
    seed a BIP32 key tree is rooted in.
*/
pub fn pbkdf2_hmacsha512(password: &[u8], salt: &[u8], rounds: u32) -> [u8; 64] {
    let mut seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut seed);
    seed
}

/**
    BIP340 style tagged hash:
    Sha256( Sha256(tag) | Sha256(tag) | data )
*/
pub fn tagged_hash(tag: &str, data: &[u8]) -> [u8; 32] {
    let tag_hash = sha256(tag.as_bytes());

    let mut preimage: Vec<u8> = Vec::with_capacity(64 + data.len());
    preimage.extend_from_slice(&tag_hash);
    preimage.extend_from_slice(&tag_hash);
    preimage.extend_from_slice(data);

    sha256(&preimage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{decode_02x, encode_02x};

    #[test]
    fn sha256_test_vector() {
        //NIST FIPS 180 example
        assert_eq!(
            encode_02x(&sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn hmac_sha512_rfc4231_case_1() {
        let key = [0x0b; 20];
        let expected = "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
                        daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854";

        assert_eq!(encode_02x(&hmac_sha512(b"Hi There", &key)), expected);
    }

    #[test]
    fn hash160_of_generator_point() {
        //Hash160 of the compressed generator point, the witness program of the
        //well known BIP173 example address.
        let pubkey = decode_02x("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");
        assert_eq!(encode_02x(&hash160(&pubkey)), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }

    #[test]
    fn tagged_hash_structure() {
        let tag_hash = sha256(b"TapTweak");
        let mut preimage = tag_hash.to_vec();
        preimage.extend_from_slice(&tag_hash);
        preimage.extend_from_slice(b"data");

        assert_eq!(tagged_hash("TapTweak", b"data"), sha256(&preimage));
    }
}
