use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable `{0}` is not set")]
    MissingVar(&'static str),
    #[error("environment variable `{0}` is empty")]
    EmptyVar(&'static str),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
    #[error("account `{0}` does not exist on chain")]
    AccountNotFound(String),
    #[error("unsupported account type `{0}`")]
    UnsupportedAccount(String),
    #[error("simulation failed (code {code}): {log}")]
    Simulation { code: u32, log: String },
    #[error("transaction rejected (code {code}, codespace `{codespace}`): {log}")]
    Rejected {
        code: u32,
        codespace: String,
        log: String,
    },
    #[error("{0} timed out after {1:?}")]
    Timeout(&'static str, Duration),
    #[error("refusing to broadcast an empty batch")]
    EmptyBatch,
}
