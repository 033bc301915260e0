//! Core traits for uniform generators and their derived draws.
//!
//! This module defines the abstractions every generator and algorithm in the
//! workspace is written against:
//! - Unsigned output words (`Word` trait)
//! - The uniform generator contract (`UniformRng` trait)
//! - Seeding from a single integer or from system entropy (`SeedableEngine` trait)
//! - Bridging `rand` generators into the contract (`RandAdapter`)
//!
//! All algorithms take generators by generic `&mut R` for static dispatch;
//! draws run in tight loops, so `Box<dyn UniformRng>` is never required.

mod adapter;
mod uniform;
mod word;

pub use adapter::RandAdapter;
pub use uniform::{SeedableEngine, UniformRng};
pub use word::Word;

#[cfg(test)]
mod tests;
