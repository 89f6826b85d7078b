//! Entente engine library.
//!
//! Exposes the board representation, order catalog, adjudicator, and the
//! environment surface for use by integration tests and the binary entry
//! point.

pub mod board;
pub mod catalog;
pub mod env;
pub mod resolve;

pub use env::{Environment, EnvError, EnvOptions, EpisodeResult, StepResult};
