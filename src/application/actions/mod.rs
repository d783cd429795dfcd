pub mod delegate;
pub mod deploy;
pub mod give_right;
pub mod query_winner;
pub mod vote;

use std::fmt;

use crate::application::prompter::Prompter;
use crate::application::workflow::ActionContext;
use crate::domain::errors::BallotError;
use crate::domain::models::ActionOutcome;
use crate::domain::services::BallotGateway;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deploy,
    GiveRight,
    Delegate,
    Vote,
    QueryWinner,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Deploy,
        Action::GiveRight,
        Action::Delegate,
        Action::Vote,
        Action::QueryWinner,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Deploy => "deploy",
            Action::GiveRight => "give-right",
            Action::Delegate => "delegate",
            Action::Vote => "vote",
            Action::QueryWinner => "query-winner",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one action to completion.
pub async fn dispatch<G: BallotGateway, P: Prompter>(
    action: Action,
    ctx: &mut ActionContext<'_, G, P>,
    params: &[String],
) -> Result<ActionOutcome, BallotError> {
    match action {
        Action::Deploy => deploy::run(ctx, params).await,
        Action::GiveRight => give_right::run(ctx, params).await,
        Action::Delegate => delegate::run(ctx, params).await,
        Action::Vote => vote::run(ctx, params).await,
        Action::QueryWinner => query_winner::run(ctx, params).await,
    }
}
