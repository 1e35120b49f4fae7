use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{Signer, Wallet};
use eyre::Context;
use tracing::{info, instrument};

use crate::config::NetworkProfile;
use crate::deployment::SigningKeyProvider;

/// Checks that the rpc answers and shows who pays for the deployments
#[instrument(skip_all, fields(network = %network.name))]
pub async fn preflight(
    network: &NetworkProfile,
    signing_key: &impl SigningKeyProvider,
) -> eyre::Result<()> {
    let provider = Provider::<Http>::try_from(network.rpc_url.as_str())?;

    let chain_id = provider
        .get_chainid()
        .await
        .context("Fetching chain id")?;

    let private_key = signing_key.signing_key()?;
    let wallet =
        Wallet::from(private_key.key).with_chain_id(chain_id.as_u64());
    let deployer = wallet.address();

    let balance = provider
        .get_balance(deployer, None)
        .await
        .with_context(|| format!("Fetching balance of {deployer:?}"))?;

    info!(
        "Connected to {} (chain id {chain_id}), deployer {deployer:?} has {} native tokens",
        network.name,
        ethers::utils::format_ether(balance)
    );

    Ok(())
}
