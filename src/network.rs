use std::collections::HashMap;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

use crate::error::Error;
use crate::Result;

const BUILTIN_NETWORKS: &str = include_str!("../data/networks.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NetworkKind {
    Local,
    Testnet,
    Mainnet,
}

impl NetworkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Network {
    #[serde(skip)]
    pub kind: Option<NetworkKind>,
    pub chain_id: String,
    pub rpc_endpoint: String,
    pub fee_denom: String,
    /// Price of one unit of gas, in base units of `fee_denom`.
    pub gas_price: u64,
    pub bech32_prefix: String,
}

impl Network {
    pub fn builtin(kind: NetworkKind) -> Result<Self> {
        let table: HashMap<String, Network> = serde_yaml::from_str(BUILTIN_NETWORKS)?;
        Self::select(table, kind)
    }

    /// Looks `kind` up in a user supplied table, falling back to the
    /// built-in entry when the file does not mention it.
    pub fn from_file(path: &str, kind: NetworkKind) -> Result<Self> {
        let table: HashMap<String, Network> = crate::utils::read_data_from_yaml(path)
            .with_context(|| format!("reading network table {path}"))?;
        if table.contains_key(kind.as_str()) {
            Self::select(table, kind)
        } else {
            Self::builtin(kind)
        }
    }

    fn select(mut table: HashMap<String, Network>, kind: NetworkKind) -> Result<Self> {
        let mut network = table
            .remove(kind.as_str())
            .ok_or_else(|| Error::UnknownNetwork(kind.as_str().into()))?;
        network.kind = Some(kind);
        Ok(network)
    }
}
