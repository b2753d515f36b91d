//! A framework for symmetric cryptography primitives.

#![no_std]

mod mds;
mod permutation;

pub use mds::*;
pub use permutation::*;
