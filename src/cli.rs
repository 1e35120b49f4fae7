use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub mod private_key;

pub use private_key::PrivateKey;

use crate::config::{DEFAULT_NETWORKS_PATH, DEFAULT_NETWORK_TYPE};
use crate::forge_utils::ContractSpec;

pub const DEFAULT_CONTRACT: &str = "src/RandomToken.sol:RandomToken";

/// Deploys a batch of randomly named ERC-20 tokens, one after another
#[derive(Debug, Clone, Parser)]
#[clap(rename_all = "kebab-case", version, about)]
pub struct Args {
    /// Network type to look up in the networks file
    #[clap(default_value = DEFAULT_NETWORK_TYPE)]
    pub network_type: String,

    /// How many tokens to deploy
    ///
    /// Prompted for when missing or not a positive integer
    pub deploy_count: Option<String>,

    /// Lower bound of the random supply
    pub min_supply: Option<String>,

    /// Upper bound of the random supply
    ///
    /// If either bound is missing or invalid, or min > max, both are prompted for
    pub max_supply: Option<String>,

    /// Path to the networks file
    #[clap(long, env = "NETWORKS", default_value = DEFAULT_NETWORKS_PATH)]
    pub networks: PathBuf,

    /// Network to deploy to, as a 1-based index or a network name
    ///
    /// Skips the selection menu
    #[clap(short, long)]
    pub network: Option<String>,

    /// Foundry project containing the token contract
    #[clap(long, env, default_value = "contracts")]
    pub contracts_dir: PathBuf,

    /// Contract to deploy, relative to the contracts dir
    #[clap(long, env, default_value = DEFAULT_CONTRACT)]
    pub contract: ContractSpec,

    /// Directory the deployment summary is written to
    #[clap(long, env, default_value = ".")]
    pub summary_dir: PathBuf,

    /// Pause between two deployments
    #[clap(long, env, default_value = "1s", value_parser = humantime::parse_duration)]
    pub delay: Duration,

    /// Private key used to sign the deployments
    #[clap(long, env, hide_env_values = true)]
    pub private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let args =
            Args::try_parse_from(["token-spray", "mainnet", "10", "100", "1000"])
                .unwrap();

        assert_eq!(args.network_type, "mainnet");
        assert_eq!(args.deploy_count.as_deref(), Some("10"));
        assert_eq!(args.min_supply.as_deref(), Some("100"));
        assert_eq!(args.max_supply.as_deref(), Some("1000"));
    }

    #[test]
    fn invalid_counts_are_left_for_the_prompts() {
        let args =
            Args::try_parse_from(["token-spray", "testnet", "lots"]).unwrap();

        assert_eq!(args.deploy_count.as_deref(), Some("lots"));
        assert_eq!(args.min_supply, None);
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["token-spray"]).unwrap();

        assert_eq!(args.network_type, DEFAULT_NETWORK_TYPE);
        assert_eq!(args.delay, Duration::from_secs(1));
        assert_eq!(args.contract.to_string(), DEFAULT_CONTRACT);
    }

    #[test]
    fn delay_uses_humantime() {
        let args =
            Args::try_parse_from(["token-spray", "--delay", "250ms"]).unwrap();

        assert_eq!(args.delay, Duration::from_millis(250));
    }
}
