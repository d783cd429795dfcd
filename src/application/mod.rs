pub mod actions;
pub mod prompter;
pub mod workflow;

pub use actions::{dispatch, Action};
pub use prompter::{LinePrompter, Prompter};
pub use workflow::{ActionContext, ActionState, Workflow};
