//! Deterministic building blocks: canonical messages, digests, base-58 text.
//!
//! Everything here is a pure function of its input. No I/O, no clocks, no
//! environment reads, no global state.

pub mod base58;
pub mod hashing;
pub mod message;
