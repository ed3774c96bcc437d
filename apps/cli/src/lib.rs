//! Goal Saver CLI - terminal front end for creating savings goals.

pub mod commands;
pub mod config;
pub mod main_lib;
pub mod secrets;

pub use main_lib::{build_state, init_tracing, AppState};
