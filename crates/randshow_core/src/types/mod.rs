//! Shared types for the randshow workspace.
//!
//! This module provides:
//! - `error`: Structured error types for entropy seeding, engine
//!   parameterisation and distribution construction
//!
//! # Re-exports
//!
//! [`EntropyError`], [`EngineError`] and [`DistributionError`] are
//! re-exported at this level for convenience.

pub mod error;

pub use error::{DistributionError, EngineError, EntropyError};
