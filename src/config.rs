use std::collections::HashMap;

use anyhow::Context;
use tracing::debug;

use crate::error::Error;
use crate::keys::{validate_address, PrivateKey};
use crate::network::Network;
use crate::Result;

pub const PRIVATE_KEY_VAR: &str = "INJECTIVE_PRIVATE_KEY";
pub const PUBLIC_ADDRESS_VAR: &str = "INJECTIVE_PUBLIC_ADDRESS";
pub const PUBLIC_ADDRESS_BACK_VAR: &str = "INJECTIVE_PUBLIC_ADDRESS_BACK";
pub const NETWORK_VAR: &str = "INJECTIVE_NETWORK";

/// Which address variable a procedure needs besides the private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Mint,
    ChangeAdmin,
}

impl Procedure {
    pub fn address_var(&self) -> &'static str {
        match self {
            Self::Mint => PUBLIC_ADDRESS_VAR,
            Self::ChangeAdmin => PUBLIC_ADDRESS_BACK_VAR,
        }
    }
}

/// Snapshot of the variables this tool reads.
#[derive(Debug, Clone, Default)]
pub struct Vars(HashMap<String, String>);

impl Vars {
    /// Loads `.env` from the working directory (if any) into the process
    /// environment, then captures the relevant variables. A `.env` that
    /// exists but does not parse is an error.
    pub fn from_process() -> Result<Self> {
        env_file_loaded(dotenvy::dotenv())?;
        Ok([PRIVATE_KEY_VAR, PUBLIC_ADDRESS_VAR, PUBLIC_ADDRESS_BACK_VAR]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_owned(), value)))
            .collect())
    }

    pub fn required(&self, key: &'static str) -> Result<&str> {
        let value = self.0.get(key).ok_or(Error::MissingVar(key))?.trim();
        if value.is_empty() {
            return Err(Error::EmptyVar(key).into());
        }
        Ok(value)
    }
}

fn env_file_loaded<T>(loaded: dotenvy::Result<T>) -> Result<()> {
    match loaded {
        Ok(_) => {
            debug!("loaded .env");
            Ok(())
        }
        Err(err) if err.not_found() => {
            debug!("no .env file");
            Ok(())
        }
        Err(err) => Err(err).context("parsing .env"),
    }
}

impl<K, V> FromIterator<(K, V)> for Vars
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Everything one procedure run needs, checked up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: Network,
    pub private_key: PrivateKey,
    /// Mint receiver or new admin, depending on the procedure.
    pub counterparty: String,
}

impl Config {
    pub fn load(vars: &Vars, network: Network, procedure: Procedure) -> Result<Self> {
        let private_key = PrivateKey::from_hex(vars.required(PRIVATE_KEY_VAR)?)?;

        let address_var = procedure.address_var();
        let counterparty = vars.required(address_var)?.to_owned();
        validate_address(&counterparty, &network.bech32_prefix)?;

        Ok(Self {
            network,
            private_key,
            counterparty,
        })
    }

    pub fn sender(&self) -> Result<String> {
        self.private_key.address(&self.network.bech32_prefix)
    }
}
