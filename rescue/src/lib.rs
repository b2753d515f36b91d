//! The Rescue Prime Optimized permutation.

#![no_std]

extern crate alloc;

mod constants;
mod error;
mod rescue;
mod rpo;

pub use constants::*;
pub use error::*;
pub use rescue::*;
pub use rpo::*;
