use std::path::{Path, PathBuf};

use ethers::types::{Address, H256};
use eyre::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::common::ContractSpec;
use crate::cli::PrivateKey;

/// Builder around `forge create`
///
/// Forge compiles the contract, broadcasts the creation transaction and waits
/// for its receipt before printing the json output.
#[derive(Debug)]
pub struct ForgeCreate {
    cwd: Option<PathBuf>,
    contract_spec: ContractSpec,
    private_key: Option<PrivateKey>,
    rpc_url: Option<String>,
    constructor_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgeOutput {
    pub deployer: Address,
    pub deployed_to: Address,
    pub transaction_hash: H256,
}

impl ForgeOutput {
    /// Forge prints the result as a single json line, usually the last one,
    /// but compiler chatter around it may contain braces too
    pub fn parse(stdout: &str) -> eyre::Result<Self> {
        if let Some(output) = stdout
            .lines()
            .rev()
            .find_map(|line| serde_json::from_str::<Self>(line.trim()).ok())
        {
            return Ok(output);
        }

        let json = strip_non_json(stdout);

        serde_json::from_str(json).with_context(|| {
            format!("Unexpected forge create output: {}", stdout.trim())
        })
    }

    /// The created contract, a zero address means forge didn't report one
    pub fn deployed_address(&self) -> eyre::Result<Address> {
        if self.deployed_to.is_zero() {
            eyre::bail!(
                "No contract address in receipt of transaction {:?}",
                self.transaction_hash
            );
        }

        Ok(self.deployed_to)
    }
}

impl ForgeCreate {
    pub fn new(contract_spec: ContractSpec) -> Self {
        Self {
            cwd: None,
            contract_spec,
            private_key: None,
            rpc_url: None,
            constructor_args: vec![],
        }
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_owned());
        self
    }

    pub fn with_private_key(mut self, private_key: PrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: String) -> Self {
        self.rpc_url = Some(rpc_url);
        self
    }

    pub fn with_constructor_arg(mut self, arg: impl ToString) -> Self {
        self.constructor_args.push(arg.to_string());
        self
    }

    fn command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new("forge");
        cmd.arg("create");

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.arg(self.contract_spec.to_string());

        if let Some(private_key) = &self.private_key {
            cmd.arg("--private-key");
            cmd.arg(format!("{private_key:#}"));
        }

        if let Some(rpc_url) = &self.rpc_url {
            cmd.arg("--rpc-url");
            cmd.arg(rpc_url);
        }

        cmd.arg("--broadcast");
        cmd.arg("--json");

        // Takes every following value, so it has to come last
        if !self.constructor_args.is_empty() {
            cmd.arg("--constructor-args");
            cmd.args(&self.constructor_args);
        }

        cmd
    }

    #[instrument(name = "forge_create", skip_all, fields(contract = %self.contract_spec))]
    pub async fn run(&self) -> eyre::Result<ForgeOutput> {
        let mut cmd = self.command();

        // Not {cmd:?}, that would print the private key
        debug!("Running forge create with {:?}", self.constructor_args);

        let output = cmd
            .output()
            .await
            .context("Failed to run forge, is foundry installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eyre::bail!("forge create failed: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);

        let output = ForgeOutput::parse(&stdout)?;

        debug!("Created: {output:?}");

        Ok(output)
    }
}

/// Fallback for json spread over several lines
fn strip_non_json(s: &str) -> &str {
    let start = s.find('{').unwrap_or(0);

    match s.rfind('}') {
        Some(end) if end >= start => &s[start..=end],
        _ => s,
    }
}
