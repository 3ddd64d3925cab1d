#![no_std]

#[cfg(test)]
extern crate std;

pub mod mersenne;

pub use mersenne::mt19937::Mt19937;
pub use mersenne::Error;
