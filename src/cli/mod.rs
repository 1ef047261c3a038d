use std::time::Duration;

use clap::Parser;

use crate::broadcast::{DEFAULT_GAS_ADJUSTMENT, DEFAULT_TIMEOUT};
use crate::config::{Config, Vars, NETWORK_VAR};
use crate::network::{Network, NetworkKind};
use crate::Result;

pub mod tx;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Network to send the transaction to
    #[arg(
        long,
        short,
        value_enum,
        ignore_case = true,
        env = NETWORK_VAR,
        default_value = "testnet"
    )]
    pub network: NetworkKind,
    /// YAML file overriding the built-in network table
    #[arg(long)]
    pub networks: Option<String>,
    /// Multiplier applied to the simulated gas
    #[arg(long, default_value_t = DEFAULT_GAS_ADJUSTMENT)]
    pub gas_adjustment: f64,
    /// Seconds to wait for each RPC call
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
    /// Print the message instead of broadcasting it
    #[arg(long)]
    pub dry_run: bool,
    #[command(subcommand)]
    pub transaction: tx::Transaction,
}

impl Args {
    pub fn network(&self) -> Result<Network> {
        match &self.networks {
            Some(path) => Network::from_file(path, self.network),
            None => Network::builtin(self.network),
        }
    }

    pub async fn run(&self, vars: &Vars) -> Result<()> {
        anyhow::ensure!(
            self.gas_adjustment.is_finite() && self.gas_adjustment > 0.0,
            "gas adjustment must be a positive number, got {}",
            self.gas_adjustment
        );
        anyhow::ensure!(self.timeout > 0, "timeout must be at least one second");

        let config = Config::load(vars, self.network()?, self.transaction.procedure())?;

        self.transaction
            .run(
                &config,
                self.dry_run,
                self.gas_adjustment,
                Duration::from_secs(self.timeout),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn mint_defaults() {
        let args = Args::try_parse_from(["arena-mint", "--network", "mainnet", "mint"]).unwrap();
        assert_eq!(args.network, NetworkKind::Mainnet);
        assert_eq!(
            args.transaction,
            tx::Transaction::Mint {
                amount: tx::DEFAULT_MINT_AMOUNT,
                denom: tx::DEFAULT_DENOM.into(),
            }
        );
    }

    #[test]
    fn change_admin_with_denom() {
        let args = Args::try_parse_from([
            "arena-mint",
            "--dry-run",
            "change-admin",
            "--denom",
            "factory/inj1x/other",
        ])
        .unwrap();
        assert!(args.dry_run);
        assert_eq!(
            args.transaction,
            tx::Transaction::ChangeAdmin {
                denom: "factory/inj1x/other".into(),
            }
        );
    }

    #[test]
    fn network_name_is_case_insensitive() {
        let args = Args::try_parse_from(["arena-mint", "--network", "Testnet", "mint"]).unwrap();
        assert_eq!(args.network, NetworkKind::Testnet);
        let args = Args::try_parse_from(["arena-mint", "-n", "MAINNET", "mint"]).unwrap();
        assert_eq!(args.network, NetworkKind::Mainnet);
    }

    #[test]
    fn timeout_defaults_to_broadcaster_default() {
        let args = Args::try_parse_from(["arena-mint", "mint"]).unwrap();
        assert_eq!(Duration::from_secs(args.timeout), DEFAULT_TIMEOUT);
    }

    #[tokio::test]
    async fn rejects_zero_timeout() {
        let args = Args::try_parse_from(["arena-mint", "--timeout", "0", "mint"]).unwrap();
        let err = args.run(&Vars::default()).await.unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn rejects_non_positive_gas_adjustment() {
        let args = Args::try_parse_from(["arena-mint", "--gas-adjustment", "0", "mint"]).unwrap();
        assert!(args.run(&Vars::default()).await.is_err());
    }
}
