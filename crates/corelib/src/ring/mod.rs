//! Consistent hash ring implementation.
//!
//! The ring owns the sorted token domain and primary ownership, and answers
//! clockwise successor queries with wraparound.

pub mod ring;

pub use ring::TokenRing;
