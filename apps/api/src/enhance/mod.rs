//! Enhancement pipeline: validate input, compose the system prompt, call the
//! completion service, validate the structured response.

pub mod handlers;
pub mod validation;
