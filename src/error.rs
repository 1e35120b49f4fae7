use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("No networks found in config for type: {network_type}")]
    NoNetworks { network_type: String },

    #[error("Network {name} has an invalid rpc url {rpc_url}: {reason}")]
    InvalidRpcUrl {
        name: String,
        rpc_url: String,
        reason: String,
    },

    #[error("Failed to load networks from {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid network selection: {input}")]
    InvalidNetwork { input: String },
}

/// Failure of a single deployment attempt.
///
/// Only the message survives, it ends up verbatim in the summary.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DeploymentError {
    pub message: String,
}

impl DeploymentError {
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<eyre::Report> for DeploymentError {
    fn from(report: eyre::Report) -> Self {
        // Keep the whole context chain, forge's stderr is usually at the bottom
        Self::new(format!("{report:#}"))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to write summary file {}: {message}", .path.display())]
pub struct SummaryWriteError {
    pub path: PathBuf,
    pub message: String,
}
