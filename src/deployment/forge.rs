use std::path::PathBuf;

use ethers::types::Address;
use tracing::{debug, instrument};

use super::signing_key::SigningKeyProvider;
use super::{Deployer, DeploymentRequest};
use crate::config::NetworkProfile;
use crate::error::DeploymentError;
use crate::forge_utils::{ContractSpec, ForgeCreate};

/// Deploys the bundled token contract with `forge create`
///
/// The contract constructor takes `(string name, string symbol, uint256 supply)`.
#[derive(Debug)]
pub struct ForgeDeployer<K> {
    contracts_dir: PathBuf,
    contract_spec: ContractSpec,
    signing_key: K,
}

impl<K> ForgeDeployer<K> {
    pub fn new(
        contracts_dir: PathBuf,
        contract_spec: ContractSpec,
        signing_key: K,
    ) -> Self {
        Self {
            contracts_dir,
            contract_spec,
            signing_key,
        }
    }

    fn forge_create(&self, network: &NetworkProfile) -> ForgeCreate {
        ForgeCreate::new(self.contract_spec.clone())
            .with_cwd(&self.contracts_dir)
            .with_rpc_url(network.rpc_url.clone())
    }
}

#[async_trait::async_trait]
impl<K> Deployer for ForgeDeployer<K>
where
    K: SigningKeyProvider,
{
    #[instrument(skip_all, fields(network = %network.name, symbol = %request.symbol))]
    async fn deploy(
        &self,
        network: &NetworkProfile,
        request: &DeploymentRequest,
    ) -> Result<Address, DeploymentError> {
        let private_key = self.signing_key.signing_key()?;

        let output = self
            .forge_create(network)
            .with_private_key(private_key)
            .with_constructor_arg(&request.name)
            .with_constructor_arg(&request.symbol)
            .with_constructor_arg(&request.supply)
            .run()
            .await?;

        debug!(
            "Transaction {:?} sent by {:?}",
            output.transaction_hash, output.deployer
        );

        Ok(output.deployed_address()?)
    }
}
