use crate::application::prompter::Prompter;
use crate::application::workflow::{prompted_signer, submit_and_confirm, ActionContext, ActionState, Workflow};
use crate::cli::validation::Validator;
use crate::domain::errors::BallotError;
use crate::domain::models::{ActionOutcome, WriteCall};
use crate::domain::services::BallotGateway;

/// Casts a vote for a proposal index after showing its name.
pub async fn run<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    let mut flow = Workflow::new("vote");
    let result = vote(ctx, params, &mut flow).await;
    flow.finish(result)
}

async fn vote<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
    flow: &mut Workflow,
) -> Result<ActionOutcome, BallotError> {
    Validator::require_params(params, &["contract-address", "proposal-index"])?;
    let contract = Validator::validate_address(&params[0])?;
    let index = Validator::validate_proposal_index(&params[1])?;

    let proposal = ctx.gateway.proposal(contract, index).await?;
    println!("Voting to proposal: {}", proposal.name());

    flow.advance(ActionState::AwaitingCredential);
    let signer = prompted_signer(ctx.prompter)?;

    flow.advance(ActionState::AwaitingConfirmation);
    if !ctx.prompter.confirm("Confirm? (Y/n): ")? {
        flow.advance(ActionState::Cancelled);
        println!("Operation cancelled");
        return Ok(ActionOutcome::Cancelled);
    }

    let receipt = submit_and_confirm(ctx.gateway, &signer, WriteCall::Vote { contract, proposal: index }, flow).await?;
    Ok(ActionOutcome::Submitted { receipt })
}
