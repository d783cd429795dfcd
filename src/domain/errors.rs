use ethers::types::TxHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BallotError {
    // ============ VALIDATION ============
    #[error("Missing parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid proposal index: {0}")]
    InvalidIndex(String),

    #[error("Proposal name does not fit in 32 bytes: {name}")]
    ProposalNameTooLong { name: String },

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    // ============ CONFIGURATION ============
    #[error("{0} is not set")]
    MissingConfig(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidConfig { name: String, value: String },

    #[error("Contract artifact error: {0}")]
    Artifact(String),

    #[error("ABI error: {0}")]
    Abi(String),

    // ============ CHAIN ============
    #[error("Insufficient balance: required {required} ETH, available {available} ETH")]
    InsufficientBalance { required: String, available: String },

    /// Reported to the user, never returned as `Err`.
    #[error("Contract address not found in deployment receipt")]
    DeploymentAddressMissing,

    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC endpoint is on chain {actual}, expected {network} ({expected})")]
    WrongChain { network: String, expected: u64, actual: u64 },

    #[error("Transaction reverted: 0x{hash:x}")]
    TransactionReverted { hash: TxHash },

    #[error("Transaction dropped from mempool: 0x{hash:x}")]
    TransactionDropped { hash: TxHash },

    #[error("Transaction 0x{hash:x} not confirmed after {secs}s")]
    ConfirmationTimeout { hash: TxHash, secs: u64 },

    // ============ TERMINAL ============
    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

impl BallotError {
    pub fn missing(name: &str) -> Self {
        BallotError::MissingParameter { name: name.to_string() }
    }
}

impl From<ethers::contract::AbiError> for BallotError {
    fn from(err: ethers::contract::AbiError) -> Self {
        BallotError::Abi(err.to_string())
    }
}

impl From<ethers::abi::Error> for BallotError {
    fn from(err: ethers::abi::Error) -> Self {
        BallotError::Abi(err.to_string())
    }
}

impl From<ethers::providers::ProviderError> for BallotError {
    fn from(err: ethers::providers::ProviderError) -> Self {
        BallotError::Network(err.to_string())
    }
}
