use ethers::{
    abi::{Abi, Token},
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, JsonRpcClient, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{
        transaction::eip2718::TypedTransaction, Address, Eip1559TransactionRequest,
        TransactionReceipt, TxHash, U256, U64,
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::errors::BallotError;
use crate::domain::models::{Proposal, TxReceipt, WriteCall};
use crate::domain::services::BallotGateway;
use crate::infrastructure::contracts::abis;
use crate::infrastructure::contracts::types::{NetworkConfig, ReceiptPolicy};
use crate::infrastructure::contracts::utils::bytes32::decode_bytes32;

// Client for the Ballot contract over JSON-RPC
#[derive(Clone)]
pub struct BallotClient<P = Http> {
    provider: Arc<Provider<P>>,
    network_config: NetworkConfig,
    receipt_policy: ReceiptPolicy,
    abi: Abi,
    artifact_path: PathBuf,
}

impl BallotClient<Http> {
    pub fn new(
        network_config: NetworkConfig,
        receipt_policy: ReceiptPolicy,
        artifact_path: PathBuf,
    ) -> Result<Self, BallotError> {
        // Create provider
        let provider = Provider::<Http>::try_from(network_config.rpc_url.as_str())
            .map_err(|e| BallotError::Network(e.to_string()))?;

        Self::with_provider(provider, network_config, receipt_policy, artifact_path)
    }
}

impl<P: JsonRpcClient + Clone + 'static> BallotClient<P> {
    pub fn with_provider(
        provider: Provider<P>,
        network_config: NetworkConfig,
        receipt_policy: ReceiptPolicy,
        artifact_path: PathBuf,
    ) -> Result<Self, BallotError> {
        let provider = provider.interval(receipt_policy.poll_interval);
        let abi = abis::load_ballot_abi()?;

        Ok(Self {
            provider: Arc::new(provider),
            network_config,
            receipt_policy,
            abi,
            artifact_path,
        })
    }

    async fn ensure_chain(&self) -> Result<u64, BallotError> {
        let actual = self.provider.get_chainid().await?.as_u64();
        if actual != self.network_config.chain_id {
            return Err(BallotError::WrongChain {
                network: self.network_config.name.clone(),
                expected: self.network_config.chain_id,
                actual,
            });
        }
        Ok(actual)
    }

    fn reader(&self, address: Address) -> Contract<Provider<P>> {
        Contract::new(address, self.abi.clone(), self.provider.clone())
    }

    fn call_tx(&self, contract: Address, function: &str, args: &[Token]) -> Result<TypedTransaction, BallotError> {
        let data = self.abi.function(function)?.encode_input(args)?;
        Ok(Eip1559TransactionRequest::new().to(contract).data(data).into())
    }

    fn deployment_tx(&self, proposals: Vec<[u8; 32]>) -> Result<TypedTransaction, BallotError> {
        let artifact = abis::load_artifact(&self.artifact_path)?;
        let constructor = self
            .abi
            .constructor()
            .ok_or_else(|| BallotError::Abi("Ballot ABI has no constructor".to_string()))?;

        let names = proposals
            .into_iter()
            .map(|name| Token::FixedBytes(name.to_vec()))
            .collect();
        let data = constructor.encode_input(artifact.bytecode.to_vec(), &[Token::Array(names)])?;

        Ok(Eip1559TransactionRequest::new().data(data).into())
    }

    fn build_tx(&self, call: WriteCall) -> Result<TypedTransaction, BallotError> {
        match call {
            WriteCall::Deploy { proposals } => self.deployment_tx(proposals),
            WriteCall::GiveRightToVote { contract, voter } => {
                self.call_tx(contract, "giveRightToVote", &[Token::Address(voter)])
            }
            WriteCall::Delegate { contract, to } => {
                self.call_tx(contract, "delegate", &[Token::Address(to)])
            }
            WriteCall::Vote { contract, proposal } => {
                self.call_tx(contract, "vote", &[Token::Uint(U256::from(proposal))])
            }
        }
    }
}

fn to_receipt(receipt: TransactionReceipt) -> TxReceipt {
    TxReceipt {
        transaction_hash: receipt.transaction_hash,
        block_number: receipt.block_number.map(|b| b.as_u64()),
        // Pre-Byzantium receipts carry no status
        success: receipt.status.map_or(true, |status| status == U64::from(1)),
        contract_address: receipt.contract_address,
    }
}

fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

impl<P: JsonRpcClient + Clone + 'static> BallotGateway for BallotClient<P> {
    async fn block_number(&self) -> Result<u64, BallotError> {
        let block = self.provider.get_block_number().await?;
        Ok(block.as_u64())
    }

    async fn balance_of(&self, account: Address) -> Result<U256, BallotError> {
        let balance = self.provider.get_balance(account, None).await?;
        Ok(balance)
    }

    async fn proposal(&self, contract: Address, index: u64) -> Result<Proposal, BallotError> {
        let (raw_name, vote_count) = self
            .reader(contract)
            .method::<_, ([u8; 32], U256)>("proposals", (U256::from(index),))?
            .call()
            .await
            .map_err(|e| BallotError::Network(e.to_string()))?;

        debug!(index, name = %decode_bytes32(&raw_name), "read proposal");

        Ok(Proposal {
            index,
            raw_name,
            vote_count: saturating_u64(vote_count),
        })
    }

    async fn winner_name(&self, contract: Address) -> Result<String, BallotError> {
        let raw_name = self
            .reader(contract)
            .method::<_, [u8; 32]>("winnerName", ())?
            .call()
            .await
            .map_err(|e| BallotError::Network(e.to_string()))?;
        Ok(decode_bytes32(&raw_name))
    }

    async fn submit(&self, signer: &LocalWallet, call: WriteCall) -> Result<TxHash, BallotError> {
        let function = call.function_name();
        let tx = self.build_tx(call)?;

        let chain_id = self.ensure_chain().await?;
        let wallet = signer.clone().with_chain_id(chain_id);
        let client = SignerMiddleware::new(self.provider.as_ref().clone(), wallet);

        let pending = client
            .send_transaction(tx, None)
            .await
            .map_err(|e| BallotError::Network(e.to_string()))?;
        let tx_hash = *pending;

        info!(function, from = ?signer.address(), tx_hash = ?tx_hash, "transaction broadcast");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt, BallotError> {
        let pending = PendingTransaction::new(hash, self.provider.as_ref())
            .interval(self.receipt_policy.poll_interval);

        let receipt = match tokio::time::timeout(self.receipt_policy.timeout, pending).await {
            Ok(result) => result?.ok_or(BallotError::TransactionDropped { hash })?,
            Err(_) => {
                return Err(BallotError::ConfirmationTimeout {
                    hash,
                    secs: self.receipt_policy.timeout.as_secs(),
                })
            }
        };

        debug!(tx_hash = ?hash, block = ?receipt.block_number, status = ?receipt.status, "receipt received");
        Ok(to_receipt(receipt))
    }
}
