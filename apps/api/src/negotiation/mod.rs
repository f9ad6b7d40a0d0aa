// Negotiation coach: scripts and rebuttals to defend a target rate.
// Unlike pricing, the model answer is relayed without post-processing.

pub mod handlers;
pub mod models;
pub mod prompts;
