use ethers::signers::LocalWallet;
use ethers::types::{Address, TxHash, U256};

use crate::domain::errors::BallotError;
use crate::domain::models::{Proposal, TxReceipt, WriteCall};

/// Read and write access to the chain as seen by the ballot actions.
///
/// Calls are issued one at a time from a single task; implementations are
/// not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait BallotGateway {
    async fn block_number(&self) -> Result<u64, BallotError>;

    async fn balance_of(&self, account: Address) -> Result<U256, BallotError>;

    /// `proposals(index)` on the contract.
    async fn proposal(&self, contract: Address, index: u64) -> Result<Proposal, BallotError>;

    /// `winnerName()` on the contract, decoded to text.
    async fn winner_name(&self, contract: Address) -> Result<String, BallotError>;

    /// Signs and broadcasts `call`, returning as soon as the node accepts it.
    async fn submit(&self, signer: &LocalWallet, call: WriteCall) -> Result<TxHash, BallotError>;

    /// Blocks until `hash` is mined or the configured timeout elapses.
    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, BallotError>;
}
