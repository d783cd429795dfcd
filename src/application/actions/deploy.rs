use ethers::signers::Signer;
use ethers::types::U256;
use ethers::utils::format_ether;
use tracing::warn;

use crate::application::prompter::Prompter;
use crate::application::workflow::{resolve_signer, submit_and_confirm, ActionContext, ActionState, Workflow};
use crate::cli::validation::Validator;
use crate::domain::errors::BallotError;
use crate::domain::models::{ActionOutcome, WriteCall};
use crate::domain::services::BallotGateway;
use crate::infrastructure::contracts::utils::bytes32::encode_bytes32;

/// 0.001 ETH
pub const MIN_DEPLOY_BALANCE_WEI: u64 = 1_000_000_000_000_000;

pub fn ensure_deploy_balance(balance: U256) -> Result<(), BallotError> {
    let required = U256::from(MIN_DEPLOY_BALANCE_WEI);
    if balance < required {
        return Err(BallotError::InsufficientBalance {
            required: format_ether(required),
            available: format_ether(balance),
        });
    }
    Ok(())
}

/// Deploys a Ballot with one proposal per parameter, then reads every proposal back.
pub async fn run<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    let mut flow = Workflow::new("deploy");
    let result = deploy(ctx, params, &mut flow).await;
    flow.finish(result)
}

async fn deploy<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
    flow: &mut Workflow,
) -> Result<ActionOutcome, BallotError> {
    Validator::require_params(params, &["proposal-name"])?;
    let proposals = params
        .iter()
        .map(|name| encode_bytes32(name))
        .collect::<Result<Vec<_>, _>>()?;

    flow.advance(ActionState::AwaitingCredential);
    let signer = resolve_signer(ctx.config.require_private_key()?)?;

    let block_number = ctx.gateway.block_number().await?;
    println!("Last block number: {}", block_number);
    println!("Deployer address: 0x{:x}", signer.address());

    let balance = ctx.gateway.balance_of(signer.address()).await?;
    println!(
        "Deployer balance: {} {}",
        format_ether(balance),
        ctx.config.network.currency_symbol
    );
    ensure_deploy_balance(balance)?;

    println!("\nDeploying Ballot contract");
    let receipt = submit_and_confirm(ctx.gateway, &signer, WriteCall::Deploy { proposals }, flow).await?;

    let contract_address = match receipt.contract_address {
        Some(address) => address,
        None => {
            warn!(tx_hash = ?receipt.transaction_hash, "deployment receipt has no contract address");
            println!("Contract deployment failed: {}", BallotError::DeploymentAddressMissing);
            return Ok(ActionOutcome::DeploymentFailed {
                transaction_hash: receipt.transaction_hash,
            });
        }
    };
    println!("Ballot contract deployed to address: 0x{:x}", contract_address);

    println!("Proposals: ");
    let mut stored = Vec::with_capacity(params.len());
    for index in 0..params.len() as u64 {
        let proposal = ctx.gateway.proposal(contract_address, index).await?;
        println!("{}", proposal);
        stored.push(proposal);
    }

    Ok(ActionOutcome::Deployed {
        transaction_hash: receipt.transaction_hash,
        contract_address,
        proposals: stored,
    })
}
