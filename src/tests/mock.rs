use ethers::signers::LocalWallet;
use ethers::types::{Address, TxHash, U256};
use std::cell::RefCell;

use crate::domain::errors::BallotError;
use crate::domain::models::{Proposal, TxReceipt, WriteCall};
use crate::domain::services::BallotGateway;
use crate::infrastructure::contracts::utils::bytes32::encode_bytes32;

pub const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// In-memory Ballot that records every call made through the gateway.
pub struct MockBallot {
    pub balance: U256,
    pub block: u64,
    pub deployed_address: Option<Address>,
    pub revert_writes: bool,
    proposals: RefCell<Vec<Proposal>>,
    calls: RefCell<Vec<&'static str>>,
    writes: RefCell<Vec<WriteCall>>,
}

impl MockBallot {
    pub fn new() -> Self {
        Self {
            balance: U256::exp10(18),
            block: 100,
            deployed_address: Some(contract_address()),
            revert_writes: false,
            proposals: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// A contract that is already deployed with `names`.
    pub fn with_proposals(names: &[&str]) -> Self {
        let mock = Self::new();
        let raw: Vec<[u8; 32]> = names.iter().map(|n| encode_bytes32(n).unwrap()).collect();
        mock.store_proposals(raw);
        mock
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<WriteCall> {
        self.writes.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }

    fn store_proposals(&self, raw: Vec<[u8; 32]>) {
        *self.proposals.borrow_mut() = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw_name)| Proposal {
                index: index as u64,
                raw_name,
                vote_count: 0,
            })
            .collect();
    }

    fn winner(&self) -> Result<Proposal, BallotError> {
        let proposals = self.proposals.borrow();
        let mut winner = proposals
            .first()
            .ok_or_else(|| BallotError::Network("execution reverted".to_string()))?;
        for proposal in proposals.iter() {
            if proposal.vote_count > winner.vote_count {
                winner = proposal;
            }
        }
        Ok(winner.clone())
    }
}

pub fn contract_address() -> Address {
    CONTRACT.parse().unwrap()
}

impl BallotGateway for MockBallot {
    async fn block_number(&self) -> Result<u64, BallotError> {
        self.record("block_number");
        Ok(self.block)
    }

    async fn balance_of(&self, _account: Address) -> Result<U256, BallotError> {
        self.record("balance_of");
        Ok(self.balance)
    }

    async fn proposal(&self, _contract: Address, index: u64) -> Result<Proposal, BallotError> {
        self.record("proposal");
        self.proposals
            .borrow()
            .get(index as usize)
            .cloned()
            .ok_or_else(|| BallotError::Network("execution reverted".to_string()))
    }

    async fn winner_name(&self, _contract: Address) -> Result<String, BallotError> {
        self.record("winner_name");
        Ok(self.winner()?.name())
    }

    async fn submit(&self, _signer: &LocalWallet, call: WriteCall) -> Result<TxHash, BallotError> {
        self.record("submit");
        if !self.revert_writes {
            match &call {
                WriteCall::Deploy { proposals } => self.store_proposals(proposals.clone()),
                WriteCall::Vote { proposal, .. } => {
                    if let Some(p) = self.proposals.borrow_mut().get_mut(*proposal as usize) {
                        p.vote_count += 1;
                    }
                }
                _ => {}
            }
        }
        self.writes.borrow_mut().push(call);
        Ok(TxHash::from_low_u64_be(self.writes.borrow().len() as u64))
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, BallotError> {
        self.record("wait_for_receipt");
        let deployed = matches!(self.writes.borrow().last(), Some(WriteCall::Deploy { .. }));
        Ok(TxReceipt {
            transaction_hash: hash,
            block_number: Some(self.block + 1),
            success: !self.revert_writes,
            contract_address: if deployed { self.deployed_address } else { None },
        })
    }
}
