use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use ethers::types::Address;
use serde::Serialize;
use tracing::instrument;

use crate::deployment::DeploymentRequest;
use crate::error::{DeploymentError, SummaryWriteError};
use crate::serde_utils;

pub const SUMMARY_PREFIX: &str = "deploy-summary-";

/// Result of one deployment attempt
///
/// Exactly one of `address` and `error` is set. Failed outcomes serialize
/// `address` as null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeploymentOutcome {
    #[serde(flatten)]
    request: DeploymentRequest,
    address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DeploymentOutcome {
    pub fn new(
        request: DeploymentRequest,
        result: Result<Address, DeploymentError>,
    ) -> Self {
        let (address, error) = match result {
            Ok(address) => (Some(address), None),
            Err(err) => (None, Some(err.message)),
        };

        Self {
            request,
            address,
            error,
        }
    }

    pub fn request(&self) -> &DeploymentRequest {
        &self.request
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

fn outcome_line(index: usize, outcome: &DeploymentOutcome) -> String {
    let DeploymentRequest {
        name,
        symbol,
        supply,
    } = outcome.request();

    match (outcome.address(), outcome.error()) {
        (Some(address), _) => format!(
            "#{index}: name={name}, symbol={symbol}, supply={supply} -> {address:?}"
        ),
        (None, error) => format!(
            "#{index}: name={name}, symbol={symbol}, supply={supply} -> FAILED ({})",
            error.unwrap_or("unknown error")
        ),
    }
}

pub fn print_summary(outcomes: &[DeploymentOutcome]) {
    let succeeded = outcomes.iter().filter(|o| o.address.is_some()).count();

    println!();
    println!(
        "All done. {succeeded}/{} deployments succeeded. Summary:",
        outcomes.len()
    );
    println!();

    for (idx, outcome) in outcomes.iter().enumerate() {
        println!("{}", outcome_line(idx + 1, outcome));
    }
}

/// `deploy-summary-2026-10-15T09-30-00-123Z.json`
pub fn summary_file_name(now: DateTime<Utc>) -> String {
    let timestamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");

    format!("{SUMMARY_PREFIX}{timestamp}.json")
}

#[instrument(skip(outcomes))]
pub async fn write_summary(
    dir: &Path,
    outcomes: &[DeploymentOutcome],
    now: DateTime<Utc>,
) -> Result<PathBuf, SummaryWriteError> {
    let path = dir.join(summary_file_name(now));

    serde_utils::write_serialize_json(&path, outcomes)
        .await
        .map_err(|err| SummaryWriteError {
            path: path.clone(),
            message: format!("{err:#}"),
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn request(symbol: &str) -> DeploymentRequest {
        DeploymentRequest {
            name: "Token0a1b2c".to_string(),
            symbol: symbol.to_string(),
            supply: "12345".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn file_name_is_filesystem_safe() {
        assert_eq!(
            summary_file_name(now()),
            "deploy-summary-2026-10-15T09-30-00-123Z.json"
        );
    }

    #[test]
    fn success_serializes_without_error() {
        let outcome = DeploymentOutcome::new(
            request("ABC"),
            Ok(Address::repeat_byte(0x11)),
        );

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "name": "Token0a1b2c",
                "symbol": "ABC",
                "supply": "12345",
                "address": "0x1111111111111111111111111111111111111111",
            })
        );
    }

    #[test]
    fn failure_serializes_null_address() {
        let outcome = DeploymentOutcome::new(
            request("ABCD"),
            Err(DeploymentError::new("insufficient funds")),
        );

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "name": "Token0a1b2c",
                "symbol": "ABCD",
                "supply": "12345",
                "address": null,
                "error": "insufficient funds",
            })
        );
    }

    #[test]
    fn summary_lines() {
        let ok = DeploymentOutcome::new(
            request("ABC"),
            Ok(Address::repeat_byte(0x11)),
        );
        let failed = DeploymentOutcome::new(
            request("XYZ"),
            Err(DeploymentError::new("boom")),
        );

        assert_eq!(
            outcome_line(1, &ok),
            "#1: name=Token0a1b2c, symbol=ABC, supply=12345 -> 0x1111111111111111111111111111111111111111"
        );
        assert_eq!(
            outcome_line(2, &failed),
            "#2: name=Token0a1b2c, symbol=XYZ, supply=12345 -> FAILED (boom)"
        );
    }

    #[tokio::test]
    async fn writes_every_outcome_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let outcomes: Vec<_> = ["AAA", "BBB", "CCC"]
            .into_iter()
            .map(|symbol| {
                DeploymentOutcome::new(
                    request(symbol),
                    Err(DeploymentError::new("boom")),
                )
            })
            .collect();

        let path = write_summary(dir.path(), &outcomes, now()).await.unwrap();

        assert_eq!(path, dir.path().join(summary_file_name(now())));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap())
                .unwrap();
        let written = written.as_array().unwrap();
        assert_eq!(written.len(), 3);
        for (entry, symbol) in written.iter().zip(["AAA", "BBB", "CCC"]) {
            assert_eq!(entry["symbol"], symbol);
            assert_eq!(entry["error"], "boom");
            assert!(entry["address"].is_null());
        }
    }

    #[tokio::test]
    async fn unwritable_directory_is_a_summary_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = write_summary(&missing, &[], now()).await.unwrap_err();

        assert_eq!(err.path, missing.join(summary_file_name(now())));
    }
}
