use cosmos_sdk_proto::cosmos::auth::v1beta1::{
    BaseAccount, QueryAccountRequest, QueryAccountResponse,
};
use cosmos_sdk_proto::cosmos::tx::v1beta1::{SimulateRequest, SimulateResponse, TxRaw};
use cosmos_sdk_proto::Any;
use prost::{Message, Name};
use tendermint_rpc::{Client, HttpClient};
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::Result;

const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

/// Account type used by Injective for every externally owned account.
#[derive(Clone, PartialEq, prost::Message)]
pub struct EthAccount {
    #[prost(message, optional, tag = "1")]
    pub base_account: Option<BaseAccount>,
    #[prost(bytes = "vec", tag = "2")]
    pub code_hash: Vec<u8>,
}

impl Name for EthAccount {
    const NAME: &'static str = "EthAccount";
    const PACKAGE: &'static str = "injective.types.v1beta1";
}

pub fn base_account_from_any(any: &Any) -> Result<BaseAccount> {
    if any.type_url == BASE_ACCOUNT_TYPE_URL {
        Ok(BaseAccount::decode(any.value.as_slice())?)
    } else if any.type_url == EthAccount::type_url() {
        let eth_account = EthAccount::decode(any.value.as_slice())?;
        Ok(eth_account
            .base_account
            .ok_or_else(|| Error::UnsupportedAccount(any.type_url.clone()))?)
    } else {
        Err(Error::UnsupportedAccount(any.type_url.clone()).into())
    }
}

/// Returns `(account_number, sequence)` for `address`.
pub async fn get_account_number_and_sequence(
    rpc_client: &HttpClient,
    address: &str,
) -> Result<(u64, u64)> {
    let query = QueryAccountRequest {
        address: address.into(),
    };

    let resp = rpc_client
        .abci_query(
            Some("/cosmos.auth.v1beta1.Query/Account".into()),
            query.encode_to_vec(),
            None,
            false,
        )
        .await?;

    if resp.code.is_err() {
        warn!("[Account] {address}: {}", resp.log);
        return Err(Error::AccountNotFound(address.into()).into());
    }

    let account = QueryAccountResponse::decode(resp.value.as_slice())?
        .account
        .ok_or_else(|| Error::AccountNotFound(address.into()))?;

    let base_account = base_account_from_any(&account)?;

    info!(
        "[Account] {address} number={} sequence={}",
        base_account.account_number, base_account.sequence
    );

    Ok((base_account.account_number, base_account.sequence))
}

/// Simulates a signed transaction and returns the gas it used.
pub async fn simulate_via_tendermint_rpc(rpc_client: &HttpClient, tx: &TxRaw) -> Result<u64> {
    #[allow(deprecated)]
    let sim_req = SimulateRequest {
        tx_bytes: tx.encode_to_vec(),
        ..Default::default()
    };

    let resp = rpc_client
        .abci_query(
            Some("/cosmos.tx.v1beta1.Service/Simulate".into()),
            sim_req.encode_to_vec(),
            None,
            false,
        )
        .await?;

    if resp.code.is_err() {
        return Err(Error::Simulation {
            code: resp.code.value(),
            log: resp.log,
        }
        .into());
    }

    let sim_resp = SimulateResponse::decode(resp.value.as_slice())?;
    let gas_used = sim_resp.gas_info.map(|info| info.gas_used).unwrap_or_default();

    debug!("[Simulate] gas used {gas_used}");

    Ok(gas_used)
}
