//! Goal Saver Core - Domain entities, services, and traits.
//!
//! This crate contains the goal-creation workflow and its models. It knows
//! nothing about HTTP or on-disk storage; those are supplied through the
//! traits it defines and implemented by the `connect` crate and front ends.

pub mod auth;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod secrets;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
