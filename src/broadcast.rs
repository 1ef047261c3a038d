use std::future::Future;
use std::time::Duration;

use cosmos_sdk_proto::cosmos::tx::v1beta1::TxRaw;
use cosmos_sdk_proto::Any;
use prost::Message;
use serde::Serialize;
use tendermint_rpc::endpoint::broadcast::tx_sync::Response as TendermintResponse;
use tendermint_rpc::{Client, HttpClient};
use tracing::{debug, info};

use crate::error::Error;
use crate::keys::PrivateKey;
use crate::network::Network;
use crate::query::{get_account_number_and_sequence, simulate_via_tendermint_rpc};
use crate::txs::{
    generate_auth_info, generate_fee, generate_tx_body, sign_transaction, update_auth_info_fee,
};
use crate::Result;

pub const DEFAULT_GAS_ADJUSTMENT: f64 = 1.3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gas limit signed into the transaction that is only used for simulation.
const SIMULATION_GAS_LIMIT: u64 = 400_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxResult {
    pub hash: String,
    pub code: u32,
    pub codespace: String,
    pub log: String,
    pub gas_limit: u64,
    pub fee: String,
}

pub fn adjusted_gas(gas_used: u64, gas_adjustment: f64) -> u64 {
    (gas_used as f64 * gas_adjustment).ceil() as u64
}

pub fn fee_amount(gas_limit: u64, gas_price: u64) -> u128 {
    u128::from(gas_limit) * u128::from(gas_price)
}

pub fn create_broadcast_payload(signed_tx: &TxRaw) -> Vec<u8> {
    signed_tx.encode_to_vec()
}

pub async fn broadcast_via_tendermint_rpc(
    rpc_client: &HttpClient,
    signed_tx: &TxRaw,
) -> Result<TendermintResponse> {
    Ok(rpc_client
        .broadcast_tx_sync(create_broadcast_payload(signed_tx))
        .await?)
}

/// Signs, simulates and submits a batch of messages for a single key.
///
/// Each call opens its own RPC client, which is dropped when the call
/// returns, whatever the outcome.
#[derive(Debug)]
pub struct Broadcaster<'a> {
    network: &'a Network,
    priv_key: &'a PrivateKey,
    gas_adjustment: f64,
    timeout: Duration,
}

impl<'a> Broadcaster<'a> {
    pub fn new(network: &'a Network, priv_key: &'a PrivateKey) -> Self {
        Self {
            network,
            priv_key,
            gas_adjustment: DEFAULT_GAS_ADJUSTMENT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_gas_adjustment(mut self, gas_adjustment: f64) -> Self {
        self.gas_adjustment = gas_adjustment;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<F, T>(&self, what: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| Error::Timeout(what, self.timeout))?
    }

    pub async fn broadcast(&self, any_msgs: &[Any]) -> Result<TxResult> {
        if any_msgs.is_empty() {
            return Err(Error::EmptyBatch.into());
        }

        let network = self.network;
        let address = self.priv_key.address(&network.bech32_prefix)?;
        let rpc_client = HttpClient::new(network.rpc_endpoint.as_str())?;

        let (account_number, sequence) = self
            .bounded(
                "account query",
                get_account_number_and_sequence(&rpc_client, &address),
            )
            .await?;

        let body = generate_tx_body(any_msgs, "");
        let auth_info = generate_auth_info(
            &self.priv_key.public_key(),
            sequence,
            generate_fee(SIMULATION_GAS_LIMIT, 0, &network.fee_denom),
        )?;

        let simulation_tx = sign_transaction(
            &body,
            &auth_info,
            &network.chain_id,
            account_number,
            self.priv_key,
        );
        let gas_used = self
            .bounded(
                "simulation",
                simulate_via_tendermint_rpc(&rpc_client, &simulation_tx),
            )
            .await?;

        let gas_limit = adjusted_gas(gas_used, self.gas_adjustment);
        let fee = fee_amount(gas_limit, network.gas_price);
        info!(
            "gas used {gas_used}, limit {gas_limit}, fee {fee}{}",
            network.fee_denom
        );

        let auth_info =
            update_auth_info_fee(auth_info, generate_fee(gas_limit, fee, &network.fee_denom));
        let signed_tx = sign_transaction(
            &body,
            &auth_info,
            &network.chain_id,
            account_number,
            self.priv_key,
        );

        debug!("broadcasting to {}", network.rpc_endpoint);
        let resp = self
            .bounded(
                "broadcast",
                broadcast_via_tendermint_rpc(&rpc_client, &signed_tx),
            )
            .await?;

        if resp.code.is_err() {
            return Err(Error::Rejected {
                code: resp.code.value(),
                codespace: resp.codespace,
                log: resp.log,
            }
            .into());
        }

        Ok(TxResult {
            hash: resp.hash.to_string(),
            code: resp.code.value(),
            codespace: resp.codespace,
            log: resp.log,
            gas_limit,
            fee: format!("{fee}{}", network.fee_denom),
        })
    }
}
