//! A framework for finite fields.

#![no_std]

pub mod exponentiation;
mod field;

pub use field::*;
