use ethers::types::Address;
use serde::Serialize;

use crate::config::NetworkProfile;
use crate::error::DeploymentError;

pub mod batch;
pub mod forge;
pub mod signing_key;

pub use self::batch::{run_batch, BatchParams};
pub use self::forge::ForgeDeployer;
pub use self::signing_key::{EnvSigningKey, SigningKeyProvider};

/// Constructor arguments of one token deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequest {
    pub name: String,
    pub symbol: String,
    /// Decimal string, supplies can exceed what json numbers hold exactly
    pub supply: String,
}

/// Submits a token deployment and waits until it is confirmed
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(
        &self,
        network: &NetworkProfile,
        request: &DeploymentRequest,
    ) -> Result<Address, DeploymentError>;
}
