use ethers::signers::{LocalWallet, Signer};
use std::fmt;
use tracing::{debug, warn};

use crate::cli::validation::with_hex_prefix;
use crate::config::Config;
use crate::domain::errors::BallotError;
use crate::domain::models::{TxReceipt, WriteCall};
use crate::domain::services::BallotGateway;
use crate::application::prompter::Prompter;

/// Everything an action needs for one invocation.
pub struct ActionContext<'a, G, P> {
    pub config: &'a Config,
    pub gateway: &'a G,
    pub prompter: &'a mut P,
}

/// Lifecycle of a write action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Validating,
    AwaitingCredential,
    AwaitingConfirmation,
    Submitted,
    Confirmed,
    Cancelled,
    Failed,
}

impl ActionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ActionState::Confirmed | ActionState::Cancelled | ActionState::Failed)
    }

    pub fn can_transition_to(self, next: ActionState) -> bool {
        use ActionState::*;

        if self.is_terminal() {
            return false;
        }
        match (self, next) {
            (_, Failed) => true,
            (Validating, AwaitingCredential) => true,
            (AwaitingCredential, AwaitingConfirmation) => true,
            // deploy sends without asking
            (AwaitingCredential, Submitted) => true,
            (AwaitingConfirmation, Submitted) => true,
            (AwaitingConfirmation, Cancelled) => true,
            (Submitted, Confirmed) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionState::Validating => "validating",
            ActionState::AwaitingCredential => "awaiting-credential",
            ActionState::AwaitingConfirmation => "awaiting-confirmation",
            ActionState::Submitted => "submitted",
            ActionState::Confirmed => "confirmed",
            ActionState::Cancelled => "cancelled",
            ActionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks the state of one action run.
#[derive(Debug)]
pub struct Workflow {
    action: &'static str,
    history: Vec<ActionState>,
}

impl Workflow {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            history: vec![ActionState::Validating],
        }
    }

    pub fn state(&self) -> ActionState {
        *self.history.last().unwrap_or(&ActionState::Validating)
    }

    pub fn history(&self) -> &[ActionState] {
        &self.history
    }

    pub fn advance(&mut self, next: ActionState) {
        let current = self.state();
        debug_assert!(
            current.can_transition_to(next),
            "illegal transition {} -> {}",
            current,
            next
        );
        debug!(action = self.action, from = %current, to = %next, "state transition");
        self.history.push(next);
    }

    /// Moves to `Failed` when `result` is an error.
    pub fn finish<T>(&mut self, result: Result<T, BallotError>) -> Result<T, BallotError> {
        if let Err(err) = &result {
            if !self.state().is_terminal() {
                warn!(action = self.action, state = %self.state(), error = %err, "action failed");
                self.advance(ActionState::Failed);
            }
        }
        result
    }
}

/// Builds a signer from a hex private key, with or without `0x`.
pub fn resolve_signer(private_key: &str) -> Result<LocalWallet, BallotError> {
    let key = with_hex_prefix(private_key.trim());
    key.parse::<LocalWallet>()
        .map_err(|e| BallotError::InvalidPrivateKey(e.to_string()))
}

/// Signer from `PRIVATE_KEY` when set, otherwise asked for interactively.
pub fn env_or_prompted_signer<P: Prompter>(
    config: &Config,
    prompter: &mut P,
) -> Result<LocalWallet, BallotError> {
    match config.private_key.as_deref() {
        Some(key) => resolve_signer(key),
        None => prompted_signer(prompter),
    }
}

pub fn prompted_signer<P: Prompter>(prompter: &mut P) -> Result<LocalWallet, BallotError> {
    let key = prompter.ask("Please enter your private key: ")?;
    resolve_signer(&key)
}

/// Sends `call` and blocks until it is mined.
pub async fn submit_and_confirm<G: BallotGateway>(
    gateway: &G,
    signer: &LocalWallet,
    call: WriteCall,
    flow: &mut Workflow,
) -> Result<TxReceipt, BallotError> {
    debug!(function = call.function_name(), from = ?signer.address(), "submitting");
    let hash = gateway.submit(signer, call).await?;
    flow.advance(ActionState::Submitted);

    println!("Transaction hash: 0x{:x}", hash);
    println!("Waiting for confirmations...");

    let receipt = gateway.wait_for_receipt(hash).await?;
    if !receipt.success {
        return Err(BallotError::TransactionReverted { hash });
    }
    flow.advance(ActionState::Confirmed);

    match receipt.block_number {
        Some(block) => println!("Transaction confirmed in block {}", block),
        None => println!("Transaction confirmed"),
    }
    Ok(receipt)
}
