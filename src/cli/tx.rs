use std::time::Duration;

use clap::Subcommand;
use tracing::info;

use crate::broadcast::Broadcaster;
use crate::config::{Config, Procedure};
use crate::msg::TokenFactoryMsg;
use crate::utils::{parse_amount, to_base64};
use crate::Result;

pub const DEFAULT_DENOM: &str = "factory/inj1haezurx6zaf43frdzegku4rwjcj9nc96hde3dp/arena_test";
pub const DEFAULT_MINT_AMOUNT: u128 = 10 * 10u128.pow(18);

pub const RESPONSE_HEADER: &str = "---Transaction Response---";

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Transaction {
    /// Mint tokens of a token-factory denom to INJECTIVE_PUBLIC_ADDRESS
    Mint {
        #[arg(long, value_parser = parse_amount, default_value = "10e18")]
        amount: u128,
        #[arg(long, default_value = DEFAULT_DENOM)]
        denom: String,
    },
    /// Hand admin rights of a token-factory denom to INJECTIVE_PUBLIC_ADDRESS_BACK
    ChangeAdmin {
        #[arg(long, default_value = DEFAULT_DENOM)]
        denom: String,
    },
}

impl Transaction {
    pub fn procedure(&self) -> Procedure {
        match self {
            Self::Mint { .. } => Procedure::Mint,
            Self::ChangeAdmin { .. } => Procedure::ChangeAdmin,
        }
    }

    pub fn build(&self, config: &Config) -> Result<TokenFactoryMsg> {
        let sender = config.sender()?;
        Ok(match self {
            Self::Mint { amount, denom } => TokenFactoryMsg::Mint(crate::msg::mint(
                &sender,
                *amount,
                denom,
                &config.counterparty,
            )),
            Self::ChangeAdmin { denom } => TokenFactoryMsg::ChangeAdmin(
                crate::msg::change_admin(&sender, denom, &config.counterparty),
            ),
        })
    }

    pub async fn run(
        &self,
        config: &Config,
        dry_run: bool,
        gas_adjustment: f64,
        timeout: Duration,
    ) -> Result<()> {
        let msg = self.build(config)?;
        info!("sender {} on {}", msg.sender(), config.network.chain_id);

        let any_msg = msg.to_any()?;

        if dry_run {
            println!("{msg:#?}");
            println!("{}: {}", any_msg.type_url, to_base64(&any_msg));
            return Ok(());
        }

        let result = Broadcaster::new(&config.network, &config.private_key)
            .with_gas_adjustment(gas_adjustment)
            .with_timeout(timeout)
            .broadcast(&[any_msg])
            .await?;

        println!("{RESPONSE_HEADER}");
        println!("{}", serde_json::to_string_pretty(&result)?);

        Ok(())
    }
}
