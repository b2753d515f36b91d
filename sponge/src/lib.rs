//! The RPO-128 duplex sponge.
//!
//! A 96-byte state, viewed as 12 Goldilocks elements, is split into a 32-byte capacity region
//! (elements 0 to 3) and a 64-byte rate region (elements 4 to 11). Input overwrites the rate
//! region and the RPO permutation runs every time 64 bytes have been absorbed or squeezed.

#![no_std]

extern crate alloc;

mod error;
mod prng;
mod sponge;
mod state;

pub use error::*;
pub use prng::*;
pub use sponge::*;
pub use state::*;
