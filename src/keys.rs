use std::fmt;

use bech32::{Bech32, Hrp};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use sha3::{Digest, Keccak256};

use crate::error::Error;
use crate::Result;

/// A secp256k1 signing key in the Injective `ethsecp256k1` flavour: addresses
/// and signatures are keccak based, like Ethereum.
#[derive(Clone)]
pub struct PrivateKey(SecretKey);

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl PrivateKey {
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let trimmed = hex_str.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let bytes =
            hex::decode(digits).map_err(|err| Error::InvalidPrivateKey(err.to_string()))?;
        if bytes.len() != 32 {
            return Err(Error::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            ))
            .into());
        }

        Ok(Self(
            SecretKey::from_slice(&bytes).map_err(|err| Error::InvalidPrivateKey(err.to_string()))?,
        ))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(&Secp256k1::signing_only(), &self.0)
    }

    /// 20 byte account address: last 20 bytes of keccak256 over the
    /// uncompressed public key without its `0x04` tag.
    pub fn address_bytes(&self) -> [u8; 20] {
        from_pk_to_address_bytes(&self.public_key())
    }

    pub fn address(&self, prefix: &str) -> Result<String> {
        Ok(bech32::encode::<Bech32>(
            Hrp::parse(prefix)?,
            &self.address_bytes(),
        )?)
    }

    pub fn sign(&self, data: &[u8]) -> [u8; 64] {
        let digest = keccak256(data);
        Secp256k1::signing_only()
            .sign_ecdsa(&Message::from_digest(digest), &self.0)
            .serialize_compact()
    }
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

pub fn from_pk_to_address_bytes(pub_key: &PublicKey) -> [u8; 20] {
    let uncompressed = pub_key.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

#[cfg(test)]
pub(crate) fn verify_signature(
    pub_key: &PublicKey,
    data: &[u8],
    signature: &[u8; 64],
) -> Result<()> {
    let signature = secp256k1::ecdsa::Signature::from_compact(signature)?;
    Secp256k1::verification_only().verify_ecdsa(
        &Message::from_digest(keccak256(data)),
        &signature,
        pub_key,
    )?;
    Ok(())
}

pub fn validate_address(address: &str, prefix: &str) -> Result<()> {
    let invalid = |reason: String| Error::InvalidAddress {
        address: address.into(),
        reason,
    };

    let (hrp, bytes) = bech32::decode(address).map_err(|err| invalid(err.to_string()))?;

    if hrp.as_str() != prefix {
        return Err(invalid(format!("expected prefix `{prefix}`, found `{}`", hrp.as_str())).into());
    }
    if bytes.len() != 20 {
        return Err(invalid(format!("expected 20 address bytes, found {}", bytes.len())).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // web3.js documentation account
    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
    const KEY_ETH_ADDRESS: &str = "2c7536e3605d9c16a7a3d7b1898e529396a65c23";

    #[test]
    fn address_matches_ethereum_derivation() {
        let key = PrivateKey::from_hex(KEY).unwrap();
        assert_eq!(hex::encode(key.address_bytes()), KEY_ETH_ADDRESS);

        let address = key.address("inj").unwrap();
        assert!(address.starts_with("inj1"));
        let (hrp, bytes) = bech32::decode(&address).unwrap();
        assert_eq!(hrp.as_str(), "inj");
        assert_eq!(hex::encode(bytes), KEY_ETH_ADDRESS);
    }

    #[test]
    fn address_is_deterministic() {
        let a = PrivateKey::from_hex(KEY).unwrap().address("inj").unwrap();
        let b = PrivateKey::from_hex(&KEY[2..]).unwrap().address("inj").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("zz").is_err());
        assert!(PrivateKey::from_hex(&"ab".repeat(31)).is_err());
        assert!(PrivateKey::from_hex(&"00".repeat(32)).is_err());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let key = PrivateKey::from_hex(KEY).unwrap();
        assert!(!format!("{key:?}").contains("4c0883"));
    }

    #[test]
    fn signature_verifies_against_keccak_digest() {
        let key = PrivateKey::from_hex(KEY).unwrap();
        let signature = key.sign(b"sign doc bytes");
        verify_signature(&key.public_key(), b"sign doc bytes", &signature).unwrap();
        assert!(verify_signature(&key.public_key(), b"other bytes", &signature).is_err());
    }

    #[test]
    fn address_validation() {
        let address = PrivateKey::from_hex(KEY).unwrap().address("inj").unwrap();
        validate_address(&address, "inj").unwrap();

        let cosmos = crate::utils::bech32(&address, "cosmos").unwrap();
        assert!(validate_address(&cosmos, "inj").is_err());
        assert!(validate_address("inj1notanaddress", "inj").is_err());
    }
}
