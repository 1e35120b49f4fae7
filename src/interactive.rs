use eyre::ContextCompat;

use self::utils::{prompt_text_handle_errors, prompt_text_until};
use crate::config::{NetworkProfile, NetworksConfig};
use crate::error::SelectionError;
use crate::types::{DeployCount, Supply, SupplyRange};

mod utils;

/// Looks up `network_type`, picks one of its profiles and checks that
/// profile's rpc url. Everything that can stop a run before the first
/// deployment happens here.
pub fn select_target_network<'a>(
    config: &'a NetworksConfig,
    network_type: &str,
    preselected: Option<&str>,
) -> eyre::Result<&'a NetworkProfile> {
    let networks = config.networks_for(network_type)?;
    let network = select_network(networks, preselected)?;

    network.validate()?;

    Ok(network)
}

/// Picks the network to deploy to.
///
/// With `preselected` (index or name) the menu is skipped. Invalid input is
/// never re-prompted, it's an error.
pub fn select_network<'a>(
    networks: &'a [NetworkProfile],
    preselected: Option<&str>,
) -> eyre::Result<&'a NetworkProfile> {
    if let Some(preselected) = preselected {
        let network = resolve_network(networks, preselected)?;
        println!("Using network: {network}");
        return Ok(network);
    }

    println!("Available networks:");
    for (idx, network) in networks.iter().enumerate() {
        println!("{}. {}", idx + 1, network);
    }

    let input = inquire::Text::new("Select a network (enter number):").prompt()?;

    Ok(resolve_network_index(networks, &input)?)
}

/// 1-based index into `networks`
pub fn resolve_network_index<'a>(
    networks: &'a [NetworkProfile],
    input: &str,
) -> Result<&'a NetworkProfile, SelectionError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|idx| idx.checked_sub(1))
        .and_then(|idx| networks.get(idx))
        .ok_or_else(|| SelectionError::InvalidNetwork {
            input: input.to_string(),
        })
}

/// 1-based index, or else an exact network name
pub fn resolve_network<'a>(
    networks: &'a [NetworkProfile],
    input: &str,
) -> Result<&'a NetworkProfile, SelectionError> {
    resolve_network_index(networks, input).or_else(|err| {
        networks
            .iter()
            .find(|network| network.name == input.trim())
            .ok_or(err)
    })
}

pub fn resolve_deploy_count(arg: Option<&str>) -> eyre::Result<DeployCount> {
    if let Some(count) = arg.and_then(|arg| arg.parse().ok()) {
        return Ok(count);
    }

    prompt_text_handle_errors("How many tokens do you want to deploy? (e.g., 100):")
}

/// Both bounds must be valid positive integers with `min <= max`
pub fn supply_range_from_args(
    min: Option<&str>,
    max: Option<&str>,
) -> Option<SupplyRange> {
    let min: Supply = min?.parse().ok()?;
    let max: Supply = max?.parse().ok()?;

    SupplyRange::new(min, max)
}

/// Re-prompt message for a maximum below `min`
pub fn max_supply_check(min: Supply) -> impl Fn(&Supply) -> Result<(), String> {
    move |max: &Supply| {
        if *max >= min {
            Ok(())
        } else {
            Err(format!("Please enter an integer >= {min}."))
        }
    }
}

pub fn resolve_supply_range(
    min: Option<&str>,
    max: Option<&str>,
) -> eyre::Result<SupplyRange> {
    if let Some(range) = supply_range_from_args(min, max) {
        return Ok(range);
    }

    println!("Please specify supply range for random generation.");

    let min: Supply =
        prompt_text_handle_errors("Enter minimum supply (integer > 0):")?;

    let max: Supply = prompt_text_until(
        &format!("Enter maximum supply (integer >= {min}):"),
        max_supply_check(min),
    )?;

    SupplyRange::new(min, max).context("Maximum supply below minimum")
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::error::ConfigurationError;

    fn networks() -> Vec<NetworkProfile> {
        ["Sepolia", "Holesky", "Base Sepolia"]
            .into_iter()
            .map(|name| NetworkProfile {
                name: name.to_string(),
                rpc_url: "http://localhost:8545".to_string(),
                explorer: "http://localhost:4000".to_string(),
            })
            .collect()
    }

    #[test]
    fn index_is_one_based() {
        let networks = networks();

        assert_eq!(resolve_network_index(&networks, "1").unwrap().name, "Sepolia");
        assert_eq!(
            resolve_network_index(&networks, " 3\n").unwrap().name,
            "Base Sepolia"
        );
    }

    #[test]
    fn invalid_indices_are_rejected() {
        let networks = networks();

        for input in ["0", "4", "-1", "abc", "", "1.5"] {
            assert_eq!(
                resolve_network_index(&networks, input),
                Err(SelectionError::InvalidNetwork {
                    input: input.to_string()
                }),
                "{input:?}"
            );
        }
    }

    #[test]
    fn preselection_accepts_names() {
        let networks = networks();

        assert_eq!(resolve_network(&networks, "Holesky").unwrap().name, "Holesky");
        assert_eq!(resolve_network(&networks, "2").unwrap().name, "Holesky");
        assert!(resolve_network(&networks, "Mainnet").is_err());
    }

    #[test]
    fn valid_deploy_count_argument_skips_the_prompt() {
        assert_eq!(resolve_deploy_count(Some("25")).unwrap(), DeployCount(25));
    }

    #[test]
    fn supply_range_arguments() {
        assert_eq!(
            supply_range_from_args(Some("100"), Some("1000")),
            SupplyRange::new(Supply(100), Supply(1000))
        );
        assert_eq!(
            supply_range_from_args(Some("5"), Some("5")),
            SupplyRange::new(Supply(5), Supply(5))
        );
    }

    #[test]
    fn invalid_supply_range_arguments_are_ignored_together() {
        assert_eq!(supply_range_from_args(Some("1000"), Some("100")), None);
        assert_eq!(supply_range_from_args(Some("0"), Some("100")), None);
        assert_eq!(supply_range_from_args(Some("10"), Some("lots")), None);
        assert_eq!(supply_range_from_args(Some("10"), None), None);
        assert_eq!(supply_range_from_args(None, None), None);
    }

    #[test]
    fn max_below_min_is_re_prompted() {
        let check = max_supply_check(Supply(10));

        assert_eq!(
            check(&Supply(9)),
            Err("Please enter an integer >= 10.".to_string())
        );
        assert_eq!(check(&Supply(10)), Ok(()));
        assert_eq!(check(&Supply(11)), Ok(()));
    }

    fn config() -> NetworksConfig {
        serde_yaml::from_str(indoc! {r#"
            testnet:
              - name: Local
                rpcUrl: http://localhost:8545
              - name: Nowhere
                rpcUrl: not a url
        "#})
        .unwrap()
    }

    #[test]
    fn unknown_network_type_stops_before_selection() {
        let config = config();

        let err = select_target_network(&config, "devnet", None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::NoNetworks { network_type }) if network_type == "devnet"
        ));
    }

    #[test]
    fn preselected_profile_is_validated() {
        let config = config();

        let network =
            select_target_network(&config, "testnet", Some("Local")).unwrap();
        assert_eq!(network.name, "Local");

        let err =
            select_target_network(&config, "testnet", Some("2")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigurationError>(),
            Some(ConfigurationError::InvalidRpcUrl { name, .. }) if name == "Nowhere"
        ));
    }

    #[test]
    fn invalid_preselection_is_a_selection_error() {
        let config = config();

        let err =
            select_target_network(&config, "testnet", Some("7")).unwrap_err();

        assert!(err.downcast_ref::<SelectionError>().is_some());
    }
}
