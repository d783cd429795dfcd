// Contract integration module
// This module handles all Ballot contract interactions

pub mod abis;
pub mod client;
pub mod config;
pub mod types;
pub mod utils;

pub use client::BallotClient;
pub use types::*;
