pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod tests;

// Main exports for external use
pub use application::{dispatch, Action, ActionContext};
pub use config::Config;
pub use domain::{BallotError, BallotGateway};
