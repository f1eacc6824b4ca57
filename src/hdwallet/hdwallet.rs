/*
    The account planner: fixes the five level BIP44 style path

        m / purpose' / coin_type' / account' / change / index

    for a script type and network, and exposes each depth as its own
    operation so account and chain keys can be cached and address
    indexes fanned out without re-deriving from the master.
*/

use crate::{
    bip39::Mnemonic,
    encoding::{
        base58::Base58,
        base58::Base58Error,
        version_prefix::VersionPrefix,
        version_prefix::ToVersionPrefix
    },
    hdwallet::{
        ChildOptions,
        ExtendedKey,
        HDWError,
        Path,
        Xprv,
        Xpub
    },
    key::{
        PrivKey,
        PubKey
    },
    util::as_u32_be,
    util::try_into,
    util::Network
};

/**
    The script type an account pays to. Selects the BIP purpose level,
    the address encoding and the default extended key version prefixes.
*/
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalletType {
    P2PKH,
    P2SH_P2WPKH,
    P2WPKH,
    P2TR
}

impl WalletType {
    /**
        The BIP purpose level index the script type derives under.
    */
    pub fn purpose(&self) -> u32 {
        match self {
            WalletType::P2PKH => 44,
            WalletType::P2SH_P2WPKH => 49,
            WalletType::P2WPKH => 84,
            WalletType::P2TR => 86
        }
    }

    /**
        Infer the script type from a serialized extended key by its
        version bytes.
    */
    pub fn from_xkey(key: &str) -> Result<Self, HDWError> {
        let bytes = Base58::decode(key).map_err(|x| match x {
            Base58Error::BadChar(i) => HDWError::BadChar(i),
            _ => HDWError::InvalidLength(0)
        })?;
        if bytes.len() < 4 { return Err(HDWError::InvalidLength(bytes.len())) }

        let version = as_u32_be(&try_into(bytes[0..4].to_vec()));
        match VersionPrefix::from_int(version) {
            Ok(VersionPrefix::Xprv) |
            Ok(VersionPrefix::Xpub) |
            Ok(VersionPrefix::Tprv) |
            Ok(VersionPrefix::Tpub) => Ok(WalletType::P2PKH),
            Ok(VersionPrefix::Yprv) |
            Ok(VersionPrefix::Ypub) |
            Ok(VersionPrefix::Uprv) |
            Ok(VersionPrefix::Upub) => Ok(WalletType::P2SH_P2WPKH),
            Ok(VersionPrefix::Zprv) |
            Ok(VersionPrefix::Zpub) |
            Ok(VersionPrefix::Vprv) |
            Ok(VersionPrefix::Vpub) => Ok(WalletType::P2WPKH),
            _ => Err(HDWError::UnknownVersionBytes(bytes[0..4].to_vec()))
        }
    }
}

impl ToVersionPrefix for WalletType {
    //BIP86 reuses the plain BIP32 version bytes; taproot never got
    //its own SLIP-0132 prefix pair.
    fn public_version_prefix(&self, network: Network) -> VersionPrefix {
        match network {
            Network::Bitcoin => match self {
                WalletType::P2PKH | WalletType::P2TR => VersionPrefix::Xpub,
                WalletType::P2SH_P2WPKH => VersionPrefix::Ypub,
                WalletType::P2WPKH => VersionPrefix::Zpub
            },
            Network::Testnet => match self {
                WalletType::P2PKH | WalletType::P2TR => VersionPrefix::Tpub,
                WalletType::P2SH_P2WPKH => VersionPrefix::Upub,
                WalletType::P2WPKH => VersionPrefix::Vpub
            }
        }
    }

    fn private_version_prefix(&self, network: Network) -> VersionPrefix {
        match network {
            Network::Bitcoin => match self {
                WalletType::P2PKH | WalletType::P2TR => VersionPrefix::Xprv,
                WalletType::P2SH_P2WPKH => VersionPrefix::Yprv,
                WalletType::P2WPKH => VersionPrefix::Zprv
            },
            Network::Testnet => match self {
                WalletType::P2PKH | WalletType::P2TR => VersionPrefix::Tprv,
                WalletType::P2SH_P2WPKH => VersionPrefix::Uprv,
                WalletType::P2WPKH => VersionPrefix::Vprv
            }
        }
    }
}

pub struct HDWallet {
    mpriv_key: Xprv,
    pub wallet_type: WalletType,
    pub account_index: u32,
    pub network: Network
}

impl HDWallet {
    /**
        Creates a new wallet from a mnemonic.
    */
    pub fn from_mnemonic(
        mnemonic: &Mnemonic,
        wallet_type: WalletType,
        account_index: u32,
        network: Network
    ) -> Result<Self, HDWError> {
        Ok(Self {
            mpriv_key: Xprv::from_mnemonic(mnemonic)?,
            wallet_type,
            account_index,
            network
        })
    }

    /**
        Creates a new wallet from a seed.
    */
    pub fn from_seed(
        seed: &[u8],
        wallet_type: WalletType,
        account_index: u32,
        network: Network
    ) -> Result<Self, HDWError> {
        Ok(Self {
            mpriv_key: Xprv::from_seed(seed)?,
            wallet_type,
            account_index,
            network
        })
    }

    /**
        Returns the stored extended master private key.
    */
    pub fn master_private_key(&self) -> Xprv {
        self.mpriv_key
    }

    /**
        Get the master extended public key derived from the master
        extended private key.
    */
    pub fn master_public_key(&self) -> Xpub {
        self.mpriv_key.get_xpub()
    }

    /**
        The account level path m/purpose'/coin_type'/account'.
    */
    pub fn account_path(&self) -> Path {
        Path {
            children: vec![
                ChildOptions::Hardened(self.wallet_type.purpose()),
                ChildOptions::Hardened(self.network.coin_type()),
                ChildOptions::Hardened(self.account_index)
            ]
        }
    }

    /**
        The extended private key at the account level. Cache this to
        fan out chains and address indexes without touching the master
        key again.
    */
    pub fn account_private_key(&self) -> Result<Xprv, HDWError> {
        self.mpriv_key.derive_from_path(&self.account_path())
    }

    /**
        The extended public key at the account level.
    */
    pub fn account_public_key(&self) -> Result<Xpub, HDWError> {
        Ok(self.account_private_key()?.get_xpub())
    }

    /**
        The extended private key of the external (change = false) or
        internal (change = true) chain under the account.
    */
    pub fn chain_private_key(&self, change: bool) -> Result<Xprv, HDWError> {
        self.account_private_key()?
            .get_xchild(ChildOptions::Normal(change as u32))
    }

    /**
        The extended public key of the chain, derived without touching
        private material past the account level.
    */
    pub fn chain_public_key(&self, change: bool) -> Result<Xpub, HDWError> {
        self.account_public_key()?
            .get_xchild(ChildOptions::Normal(change as u32))
    }

    /**
        The private key at a single address index.
    */
    pub fn address_private_key(&self, change: bool, address_index: u32) -> Result<PrivKey, HDWError> {
        Ok(
            self.chain_private_key(change)?
                .get_xchild(ChildOptions::Normal(address_index))?
                .get_prv()
        )
    }

    /**
        The public key at a single address index.
    */
    pub fn address_public_key(&self, change: bool, address_index: u32) -> Result<PubKey, HDWError> {
        Ok(
            self.chain_public_key(change)?
                .get_xchild(ChildOptions::Normal(address_index))?
                .get_pub()
        )
    }

    /**
        The address at a single index, encoded for the wallet script
        type and network.
    */
    pub fn address_at(&self, change: bool, address_index: u32) -> Result<String, HDWError> {
        self.chain_private_key(change)?
            .get_xchild(ChildOptions::Normal(address_index))?
            .get_address(&self.wallet_type, self.network)
            .map_err(HDWError::AddressEncoding)
    }

    /**
        Batch derivation of the first `count` addresses on a chain.
        The chain key is derived once and each index fans out from it.
    */
    pub fn addresses(&self, change: bool, count: u32) -> Result<Vec<String>, HDWError> {
        let chain_key = self.chain_private_key(change)?;

        let mut addresses: Vec<String> = Vec::with_capacity(count as usize);
        for i in 0..count {
            addresses.push(
                chain_key
                    .get_xchild(ChildOptions::Normal(i))?
                    .get_address(&self.wallet_type, self.network)
                    .map_err(HDWError::AddressEncoding)?
            );
        }

        Ok(addresses)
    }
}
