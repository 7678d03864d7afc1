//! Layout calculation for N-up composition
//!
//! This module handles all the geometric work: partitioning the output
//! sheet into slots and computing the scale/offset/rotation that places
//! one source-page copy in each slot. It is pure arithmetic with no PDF
//! dependencies.

mod slots;
mod types;

pub use slots::*;
pub use types::*;
