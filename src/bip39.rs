/*
    This module implements the seed half of the BIP-39 standard:
    a mnemonic phrase and optional passphrase are stretched into
    the 64 byte seed that roots a BIP32 key tree.

    Word list handling is left to the caller. Phrases are expected
    to have passed word list and checksum validation before they
    reach this type.
*/

use crate::hash;

/// PBKDF2 round count fixed by the standard
const PBKDF2_ROUNDS: u32 = 2048;

#[derive(Clone)]
pub struct Mnemonic {
    phrase: String,  //The mnemonic phrase, single space separated
    seed: [u8; 64]   //The seed key (512 bits)
}

#[derive(Debug, Clone, PartialEq)]
pub enum MnemonicErr {
    EmptyPhrase(),
    InvalidWordCount(usize)
}

impl Mnemonic {
    /**
        Creates a mnemonic from a phrase and optional passphrase.

        The phrase is normalized to single space separation so that
        equivalent spellings stretch to the same seed. The seed is
        PBKDF2-HMAC-SHA512 of the phrase, salted with the passphrase
        behind the fixed "mnemonic" prefix.
    */
    pub fn from_phrase(phrase: &str, passphrase: &str) -> Result<Self, MnemonicErr> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        match words.len() {
            12 | 15 | 18 | 21 | 24 => { /* Continue */ },
            0 => return Err(MnemonicErr::EmptyPhrase()),
            x => return Err(MnemonicErr::InvalidWordCount(x))
        }
        let phrase = words.join(" ");

        let mut salt = String::from("mnemonic");
        salt.push_str(passphrase);
        let seed = hash::pbkdf2_hmacsha512(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS);

        Ok(Self {
            phrase,
            seed
        })
    }

    /**
        Creates a mnemonic from a word sequence.
    */
    pub fn from_words(words: &[String], passphrase: &str) -> Result<Self, MnemonicErr> {
        Self::from_phrase(&words.join(" "), passphrase)
    }

    /**
        The normalized phrase.
    */
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /**
        The 64 byte seed derived from the phrase and passphrase.
    */
    pub fn seed(&self) -> [u8; 64] {
        self.seed
    }
}
