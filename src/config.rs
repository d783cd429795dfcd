use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::errors::BallotError;
use crate::infrastructure::contracts::config::{alchemy_sepolia_url, get_sepolia_config};
use crate::infrastructure::contracts::types::{NetworkConfig, ReceiptPolicy};

pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/Ballot.sol/Ballot.json";

/// Process configuration, read once at startup and passed to every action.
#[derive(Debug, Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub private_key: Option<String>,
    pub artifact_path: PathBuf,
    pub receipt_policy: ReceiptPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, BallotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, BallotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let rpc_url = match get("BALLOT_RPC_URL") {
            Some(url) => url,
            None => {
                let api_key = get("ALCHEMY_API_KEY")
                    .ok_or_else(|| BallotError::MissingConfig("ALCHEMY_API_KEY".to_string()))?;
                alchemy_sepolia_url(&api_key)
            }
        };

        let mut receipt_policy = ReceiptPolicy::default();
        if let Some(secs) = get("BALLOT_RECEIPT_TIMEOUT_SECS") {
            receipt_policy.timeout = Duration::from_secs(parse_number("BALLOT_RECEIPT_TIMEOUT_SECS", &secs)?);
        }
        if let Some(millis) = get("BALLOT_POLL_INTERVAL_MS") {
            receipt_policy.poll_interval = Duration::from_millis(parse_number("BALLOT_POLL_INTERVAL_MS", &millis)?);
        }

        Ok(Config {
            network: get_sepolia_config(rpc_url),
            private_key: get("PRIVATE_KEY"),
            artifact_path: get("BALLOT_ARTIFACT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH)),
            receipt_policy,
        })
    }

    /// `PRIVATE_KEY`, for actions that never prompt for one.
    pub fn require_private_key(&self) -> Result<&str, BallotError> {
        self.private_key
            .as_deref()
            .ok_or_else(|| BallotError::MissingConfig("PRIVATE_KEY".to_string()))
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, BallotError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BallotError::InvalidConfig {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, BallotError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_api_key_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, BallotError::MissingConfig(ref name) if name == "ALCHEMY_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert!(config_from(&[("ALCHEMY_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("ALCHEMY_API_KEY", "key")]).unwrap();
        assert_eq!(config.network.rpc_url, "https://eth-sepolia.g.alchemy.com/v2/key");
        assert_eq!(config.private_key, None);
        assert_eq!(config.artifact_path, PathBuf::from(DEFAULT_ARTIFACT_PATH));
        assert_eq!(config.receipt_policy, ReceiptPolicy::default());
    }

    #[test]
    fn test_rpc_override_skips_api_key() {
        let config = config_from(&[("BALLOT_RPC_URL", "http://127.0.0.1:8545")]).unwrap();
        assert_eq!(config.network.rpc_url, "http://127.0.0.1:8545");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ALCHEMY_API_KEY", "key"),
            ("PRIVATE_KEY", "abc"),
            ("BALLOT_ARTIFACT", "out/Ballot.json"),
            ("BALLOT_RECEIPT_TIMEOUT_SECS", "60"),
            ("BALLOT_POLL_INTERVAL_MS", "500"),
        ])
        .unwrap();
        assert_eq!(config.require_private_key().unwrap(), "abc");
        assert_eq!(config.artifact_path, PathBuf::from("out/Ballot.json"));
        assert_eq!(config.receipt_policy.timeout, Duration::from_secs(60));
        assert_eq!(config.receipt_policy.poll_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["soon", "0", "-5"] {
            let err = config_from(&[("ALCHEMY_API_KEY", "key"), ("BALLOT_RECEIPT_TIMEOUT_SECS", value)])
                .unwrap_err();
            assert!(matches!(err, BallotError::InvalidConfig { .. }), "{} accepted", value);
        }
    }

    #[test]
    fn test_private_key_required_when_asked() {
        let config = config_from(&[("ALCHEMY_API_KEY", "key")]).unwrap();
        assert!(matches!(
            config.require_private_key(),
            Err(BallotError::MissingConfig(_))
        ));
    }
}
