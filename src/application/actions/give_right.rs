use crate::application::prompter::Prompter;
use crate::application::workflow::{env_or_prompted_signer, submit_and_confirm, ActionContext, ActionState, Workflow};
use crate::cli::validation::Validator;
use crate::domain::errors::BallotError;
use crate::domain::models::{ActionOutcome, WriteCall};
use crate::domain::services::BallotGateway;

/// Chairperson grants a voter the right to vote.
pub async fn run<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    let mut flow = Workflow::new("give-right");
    let result = give_right(ctx, params, &mut flow).await;
    flow.finish(result)
}

async fn give_right<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
    flow: &mut Workflow,
) -> Result<ActionOutcome, BallotError> {
    Validator::require_params(params, &["contract-address"])?;
    let contract = Validator::validate_address(&params[0])?;
    let voter = params
        .get(1)
        .map(|voter| Validator::validate_user_address(voter))
        .transpose()?;

    flow.advance(ActionState::AwaitingCredential);
    let signer = env_or_prompted_signer(ctx.config, ctx.prompter)?;
    let voter = match voter {
        Some(voter) => voter,
        None => Validator::validate_user_address(&ctx.prompter.ask("Give voting right to address: ")?)?,
    };

    flow.advance(ActionState::AwaitingConfirmation);
    if !ctx.prompter.confirm("Confirm giving voting right? (Y/n): ")? {
        flow.advance(ActionState::Cancelled);
        println!("Operation cancelled");
        return Ok(ActionOutcome::Cancelled);
    }

    let receipt = submit_and_confirm(ctx.gateway, &signer, WriteCall::GiveRightToVote { contract, voter }, flow).await?;
    Ok(ActionOutcome::Submitted { receipt })
}
