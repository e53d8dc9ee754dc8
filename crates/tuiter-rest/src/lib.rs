//! # Tuiter REST
//!
//! REST API layer using Axum for the Tuiter backend.
//! Provides HTTP endpoints for the follows and messages resources.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
