use std::time::Duration;

use indicatif::ProgressStyle;
use rand::Rng;
use tracing::{error, info, info_span, instrument, Instrument, Span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use super::Deployer;
use crate::config::NetworkProfile;
use crate::identifiers;
use crate::report::DeploymentOutcome;
use crate::types::{DeployCount, SupplyRange};

const PROGRESS_TEMPLATE: &str =
    "{spinner} {msg} [{bar:30}] {pos}/{len} {elapsed}";

#[derive(Debug, Clone, Copy)]
pub struct BatchParams {
    pub count: DeployCount,
    pub supply_range: SupplyRange,
    /// Pause after every attempt, successful or not
    pub delay: Duration,
}

/// Deploys `params.count` random tokens one after another.
///
/// A failed deployment is recorded and the batch moves on, so the returned
/// outcomes always line up one-to-one with the attempts, in order.
#[instrument(skip_all, fields(network = %network.name))]
pub async fn run_batch<D, R>(
    deployer: &D,
    rng: &mut R,
    network: &NetworkProfile,
    params: &BatchParams,
) -> Vec<DeploymentOutcome>
where
    D: Deployer + ?Sized,
    R: Rng,
{
    let total = *params.count;

    let span = Span::current();
    span.pb_set_style(
        &ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    span.pb_set_length(total);
    span.pb_set_message("Deploying");

    let mut outcomes = Vec::new();

    for i in 1..=total {
        let request = identifiers::random_request(rng, params.supply_range);

        info!(
            "Deploy #{i}/{total}: name={}, symbol={}, supply={}",
            request.name, request.symbol, request.supply
        );

        let result = deployer
            .deploy(network, &request)
            .instrument(info_span!("deploy", attempt = i))
            .await;

        match &result {
            Ok(address) => info!(
                "  -> Success! Contract deployed at {address:?} ({})",
                network.explorer_address_url(*address)
            ),
            Err(err) => error!("  -> Failed on deploy #{i}: {err}"),
        }

        outcomes.push(DeploymentOutcome::new(request, result));
        span.pb_inc(1);

        tokio::time::sleep(params.delay).await;
    }

    outcomes
}
