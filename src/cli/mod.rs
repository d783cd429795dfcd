pub mod validation;

use clap::{Parser, Subcommand};

use crate::application::actions::Action;

#[derive(Parser, Debug)]
#[command(name = "ballot", author, version, about = "Deploy and vote on a Ballot contract on Sepolia", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

// Parameters are kept raw so the actions can report exactly which one is missing or malformed.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deploy a Ballot contract with the given proposal names
    Deploy {
        #[arg(value_name = "PROPOSAL_NAME", allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Give an address the right to vote (chairperson only)
    GiveRight {
        /// CONTRACT_ADDRESS [VOTER_ADDRESS]
        #[arg(value_name = "PARAMS", allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Delegate your vote to another address
    Delegate {
        /// CONTRACT_ADDRESS [DELEGATE_ADDRESS]
        #[arg(value_name = "PARAMS", allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Vote for a proposal by index
    Vote {
        /// CONTRACT_ADDRESS PROPOSAL_INDEX
        #[arg(value_name = "PARAMS", allow_hyphen_values = true)]
        params: Vec<String>,
    },

    /// Print the currently winning proposal
    QueryWinner {
        /// CONTRACT_ADDRESS
        #[arg(value_name = "PARAMS", allow_hyphen_values = true)]
        params: Vec<String>,
    },
}

impl Command {
    pub fn into_parts(self) -> (Action, Vec<String>) {
        match self {
            Command::Deploy { params } => (Action::Deploy, params),
            Command::GiveRight { params } => (Action::GiveRight, params),
            Command::Delegate { params } => (Action::Delegate, params),
            Command::Vote { params } => (Action::Vote, params),
            Command::QueryWinner { params } => (Action::QueryWinner, params),
        }
    }
}
