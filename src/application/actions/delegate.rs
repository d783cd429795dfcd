use crate::application::prompter::Prompter;
use crate::application::workflow::{prompted_signer, submit_and_confirm, ActionContext, ActionState, Workflow};
use crate::cli::validation::Validator;
use crate::domain::errors::BallotError;
use crate::domain::models::{ActionOutcome, WriteCall};
use crate::domain::services::BallotGateway;

/// Delegates the caller's vote to another address. The key is always prompted for.
pub async fn run<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    let mut flow = Workflow::new("delegate");
    let result = delegate(ctx, params, &mut flow).await;
    flow.finish(result)
}

async fn delegate<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
    flow: &mut Workflow,
) -> Result<ActionOutcome, BallotError> {
    Validator::require_params(params, &["contract-address"])?;
    let contract = Validator::validate_address(&params[0])?;
    let to = params
        .get(1)
        .map(|to| Validator::validate_user_address(to))
        .transpose()?;

    flow.advance(ActionState::AwaitingCredential);
    let signer = prompted_signer(ctx.prompter)?;
    let to = match to {
        Some(to) => to,
        None => Validator::validate_user_address(&ctx.prompter.ask("Delegate your vote to address: ")?)?,
    };

    flow.advance(ActionState::AwaitingConfirmation);
    if !ctx.prompter.confirm("Confirm delegating vote? (Y/n): ")? {
        flow.advance(ActionState::Cancelled);
        println!("Operation cancelled");
        return Ok(ActionOutcome::Cancelled);
    }

    let receipt = submit_and_confirm(ctx.gateway, &signer, WriteCall::Delegate { contract, to }, flow).await?;
    Ok(ActionOutcome::Submitted { receipt })
}
