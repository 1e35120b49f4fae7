use std::collections::HashMap;
use std::path::Path;

use ethers::types::Address;
use reqwest::Url;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::ConfigurationError;
use crate::serde_utils;

pub const DEFAULT_NETWORK_TYPE: &str = "testnet";
pub const DEFAULT_NETWORKS_PATH: &str = "networks.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_more::Display)]
#[display(fmt = "{}", name)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub name: String,
    #[serde(alias = "rpc_url")]
    pub rpc_url: String,
    #[serde(default)]
    pub explorer: String,
}

impl NetworkProfile {
    pub fn explorer_address_url(&self, address: Address) -> String {
        format!("{}/address/{address:?}", self.explorer.trim_end_matches('/'))
    }

    /// Only the rpc url is checked, the explorer link is cosmetic
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Url::parse(&self.rpc_url).map_err(|err| {
            ConfigurationError::InvalidRpcUrl {
                name: self.name.clone(),
                rpc_url: self.rpc_url.clone(),
                reason: err.to_string(),
            }
        })?;

        Ok(())
    }
}

/// Network profiles grouped by network type, e.g. `testnet` or `mainnet`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NetworksConfig {
    pub networks: HashMap<String, Vec<NetworkProfile>>,
}

impl NetworksConfig {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();

        serde_utils::read_deserialize(path).await.map_err(|err| {
            ConfigurationError::Unreadable {
                path: path.to_owned(),
                message: format!("{err:#}"),
            }
        })
    }

    /// Profiles for `network_type` in file order.
    ///
    /// An absent or empty list is an error. Profiles aren't validated here, a
    /// bad rpc url only matters once that profile is picked.
    #[instrument(skip(self))]
    pub fn networks_for(
        &self,
        network_type: &str,
    ) -> Result<&[NetworkProfile], ConfigurationError> {
        let networks = match self.networks.get(network_type) {
            Some(networks) if !networks.is_empty() => networks,
            _ => {
                return Err(ConfigurationError::NoNetworks {
                    network_type: network_type.to_string(),
                })
            }
        };

        info!("Loaded {} {network_type} networks", networks.len());

        Ok(networks.as_slice())
    }
}
