use anyhow::Context;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use prost::Message;
use serde::de::DeserializeOwned;

use crate::Result;

pub fn to_base64<T>(t: &T) -> String
where
    T: Message,
{
    BASE64_STANDARD.encode(t.encode_to_vec())
}

/// Re-encodes a bech32 address under another prefix.
#[cfg(test)]
pub(crate) fn bech32(address: &str, prefix: &str) -> Result<String> {
    let (_, bytes) = bech32::decode(address)?;
    Ok(bech32::encode::<bech32::Bech32>(
        bech32::Hrp::parse(prefix)?,
        &bytes,
    )?)
}

/// Parses an integer amount, either plain (`10000`) or with a decimal
/// exponent (`10e18`). Underscores are ignored.
pub fn parse_amount(st: &str) -> Result<u128> {
    let st = st.trim().replace('_', "");
    match st.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => {
            let mantissa: u128 = mantissa.parse().context("amount mantissa")?;
            let exponent: u32 = exponent.parse().context("amount exponent")?;
            10u128
                .checked_pow(exponent)
                .and_then(|scale| mantissa.checked_mul(scale))
                .context("amount overflows u128")
        }
        None => Ok(st.parse().context("amount")?),
    }
}

pub fn read_data_from_yaml<T>(path: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let file = std::fs::File::open(path).with_context(|| format!("opening {path}"))?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts() {
        assert_eq!(parse_amount("42").unwrap(), 42);
        assert_eq!(parse_amount("10e18").unwrap(), 10_000_000_000_000_000_000);
        assert_eq!(parse_amount("1_000").unwrap(), 1000);
        assert!(parse_amount("1e40").is_err());
        assert!(parse_amount("-1").is_err());
        assert!(parse_amount("inj").is_err());
    }
}
