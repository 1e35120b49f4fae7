use crate::cli::PrivateKey;
use crate::error::DeploymentError;

pub trait SigningKeyProvider: Send + Sync {
    fn signing_key(&self) -> Result<PrivateKey, DeploymentError>;
}

/// Key captured from `PRIVATE_KEY` at startup
///
/// Parsed on every use so that a missing or malformed key fails each
/// deployment instead of the whole run.
#[derive(Debug, Clone)]
pub struct EnvSigningKey {
    raw: Option<String>,
}

impl EnvSigningKey {
    pub fn new(raw: Option<String>) -> Self {
        Self { raw }
    }
}

impl SigningKeyProvider for EnvSigningKey {
    fn signing_key(&self) -> Result<PrivateKey, DeploymentError> {
        let raw = self
            .raw
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| DeploymentError::new("PRIVATE_KEY is not set"))?;

        raw.parse().map_err(|err| {
            DeploymentError::new(format!("PRIVATE_KEY is invalid: {err}"))
        })
    }
}
