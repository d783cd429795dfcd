use ethers::types::Address;

use crate::domain::errors::BallotError;

/// Validation utilities for command-line parameters
pub struct Validator;

impl Validator {
    /// Fails unless at least `names.len()` parameters were given, naming the first missing one.
    pub fn require_params(params: &[String], names: &[&str]) -> Result<(), BallotError> {
        match names.get(params.len()) {
            Some(missing) => Err(BallotError::missing(missing)),
            None => Ok(()),
        }
    }

    /// Strict `0x` + 40 hex characters check, then parse.
    pub fn validate_address(address: &str) -> Result<Address, BallotError> {
        let hex_part = match address.strip_prefix("0x") {
            Some(rest) => rest,
            None => return Err(BallotError::InvalidAddress(address.to_string())),
        };

        if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BallotError::InvalidAddress(address.to_string()));
        }

        address
            .parse::<Address>()
            .map_err(|_| BallotError::InvalidAddress(address.to_string()))
    }

    /// Validates an address typed by a user, who may omit the `0x` prefix.
    pub fn validate_user_address(address: &str) -> Result<Address, BallotError> {
        Self::validate_address(&with_hex_prefix(address.trim()))
    }

    /// Proposal indices are non-negative integers.
    pub fn validate_proposal_index(index: &str) -> Result<u64, BallotError> {
        index
            .parse::<u64>()
            .map_err(|_| BallotError::InvalidIndex(index.to_string()))
    }
}

/// Prefixes a bare hex string with `0x`.
pub fn with_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") {
        value.to_string()
    } else {
        format!("0x{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_hex_prefix() {
        assert_eq!(with_hex_prefix("abcd"), "0xabcd");
        assert_eq!(with_hex_prefix("0xabcd"), "0xabcd");
    }

    #[test]
    fn test_validate_address_accepts_mixed_case() {
        assert!(Validator::validate_address("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").is_ok());
        assert!(Validator::validate_address("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").is_ok());
    }

    #[test]
    fn test_validate_user_address_adds_prefix() {
        let address = Validator::validate_user_address(" f39Fd6e51aad88F6F4ce6aB8827279cffFb92266\n").unwrap();
        assert_eq!(
            address,
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn test_require_params_names_first_missing() {
        let params = vec!["0x1234567890123456789012345678901234567890".to_string()];
        let err = Validator::require_params(&params, &["contract-address", "proposal-index"]).unwrap_err();
        assert!(matches!(err, BallotError::MissingParameter { ref name } if name == "proposal-index"));

        assert!(Validator::require_params(&params, &["contract-address"]).is_ok());
    }
}
