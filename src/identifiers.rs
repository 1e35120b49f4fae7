use rand::Rng;

use crate::deployment::DeploymentRequest;
use crate::types::SupplyRange;

pub const NAME_PREFIX: &str = "Token";

const SYMBOL_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `Token` followed by 3 random bytes in hex
pub fn random_name(rng: &mut impl Rng) -> String {
    let suffix: [u8; 3] = rng.gen();

    format!("{NAME_PREFIX}{}", hex::encode(suffix))
}

pub fn random_symbol(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(3..=5);

    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..SYMBOL_ALPHABET.len());
            SYMBOL_ALPHABET[idx] as char
        })
        .collect()
}

pub fn random_supply(rng: &mut impl Rng, range: SupplyRange) -> String {
    rng.gen_range(*range.min()..=*range.max()).to_string()
}

pub fn random_request(
    rng: &mut impl Rng,
    range: SupplyRange,
) -> DeploymentRequest {
    DeploymentRequest {
        name: random_name(rng),
        symbol: random_symbol(rng),
        supply: random_supply(rng, range),
    }
}
