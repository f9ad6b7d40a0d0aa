// Pricing calculator: prompt construction from a freelance profile, model call,
// and the deterministic monthly projection.

pub mod handlers;
pub mod market_data;
pub mod models;
pub mod projection;
pub mod prompts;
