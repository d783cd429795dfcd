pub mod errors;
pub mod models;
pub mod services;

pub use errors::BallotError;
pub use models::*;
pub use services::BallotGateway;
