//! # Tuiter Core
//!
//! Core types, errors, and domain models for the Tuiter backend.
//! This crate provides the foundational abstractions shared by the
//! repository, REST, and server layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
