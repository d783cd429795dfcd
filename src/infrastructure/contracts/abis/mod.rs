use std::fs;
use std::path::Path;

use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;

use crate::domain::errors::BallotError;

const BALLOT_ABI: &str = include_str!("ballot_abi.json");

/// The part of a Hardhat compilation artifact needed for deployment.
/// The interface itself comes from the bundled ABI.
#[derive(Debug, Deserialize)]
pub struct ContractArtifact {
    pub bytecode: Bytes,
}

pub fn load_ballot_abi() -> Result<Abi, BallotError> {
    serde_json::from_str(BALLOT_ABI)
        .map_err(|e| BallotError::Abi(format!("Failed to parse bundled Ballot ABI: {}", e)))
}

pub fn load_artifact(path: &Path) -> Result<ContractArtifact, BallotError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BallotError::Artifact(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_artifact(&content)
        .map_err(|e| BallotError::Artifact(format!("Failed to parse {}: {}", path.display(), e)))
}

fn parse_artifact(content: &str) -> Result<ContractArtifact, String> {
    let artifact: ContractArtifact = serde_json::from_str(content).map_err(|e| e.to_string())?;
    if artifact.bytecode.is_empty() {
        return Err("artifact has no bytecode".to_string());
    }
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_abi_has_ballot_functions() {
        let abi = load_ballot_abi().unwrap();
        for name in ["proposals", "vote", "delegate", "giveRightToVote", "winnerName", "winningProposal"] {
            assert!(abi.function(name).is_ok(), "missing {}", name);
        }
        assert!(abi.constructor().is_some());
    }

    #[test]
    fn test_parse_artifact() {
        let content = format!(
            r#"{{ "contractName": "Ballot", "abi": {}, "bytecode": "0x6080604052" }}"#,
            BALLOT_ABI
        );
        let artifact = parse_artifact(&content).unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_artifact_without_bytecode_rejected() {
        let content = r#"{ "abi": [], "bytecode": "0x" }"#;
        assert!(parse_artifact(content).is_err());

        let content = r#"{ "contractName": "Ballot", "abi": [] }"#;
        assert!(parse_artifact(content).is_err());
    }

    #[test]
    fn test_missing_artifact_file() {
        let err = load_artifact(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, BallotError::Artifact(_)));
    }
}
