pub mod broadcast;
pub mod cli;
pub mod config;
pub mod error;
pub mod keys;
pub mod msg;
pub mod network;
pub mod query;
pub mod telemetry;
pub mod txs;
pub mod utils;

pub type Result<O> = anyhow::Result<O>;
