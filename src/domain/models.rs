use ethers::types::{Address, TxHash};
use std::fmt;

use crate::infrastructure::contracts::utils::bytes32::decode_bytes32;

// ============ CONTRACT STATE ============

/// A proposal as stored by the Ballot contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub index: u64,
    pub raw_name: [u8; 32],
    pub vote_count: u64,
}

impl Proposal {
    pub fn name(&self) -> String {
        decode_bytes32(&self.raw_name)
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ index: {}, name: {:?}, raw: 0x{}, votes: {} }}",
            self.index,
            self.name(),
            hex::encode(self.raw_name),
            self.vote_count
        )
    }
}

// ============ TRANSACTIONS ============

/// A state-changing call against the Ballot contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCall {
    Deploy { proposals: Vec<[u8; 32]> },
    GiveRightToVote { contract: Address, voter: Address },
    Delegate { contract: Address, to: Address },
    Vote { contract: Address, proposal: u64 },
}

impl WriteCall {
    pub fn function_name(&self) -> &'static str {
        match self {
            WriteCall::Deploy { .. } => "constructor",
            WriteCall::GiveRightToVote { .. } => "giveRightToVote",
            WriteCall::Delegate { .. } => "delegate",
            WriteCall::Vote { .. } => "vote",
        }
    }
}

/// Receipt of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub success: bool,
    pub contract_address: Option<Address>,
}

// ============ ACTION RESULTS ============

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Deployed {
        transaction_hash: TxHash,
        contract_address: Address,
        proposals: Vec<Proposal>,
    },
    /// Mined, but the receipt carried no contract address.
    DeploymentFailed { transaction_hash: TxHash },
    Submitted { receipt: TxReceipt },
    Winner { name: String },
    Cancelled,
}
