use crate::application::prompter::Prompter;
use crate::application::workflow::ActionContext;
use crate::cli::validation::Validator;
use crate::domain::errors::BallotError;
use crate::domain::models::ActionOutcome;
use crate::domain::services::BallotGateway;

/// Reads the current winner. No signer, no transaction.
pub async fn run<G: BallotGateway, P: Prompter>(
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    Validator::require_params(params, &["contract-address"])?;
    let contract = Validator::validate_address(&params[0])?;

    let name = ctx.gateway.winner_name(contract).await?;
    println!("Winning Proposal is: {}", name);

    Ok(ActionOutcome::Winner { name })
}
