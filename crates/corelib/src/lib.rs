//! Core library for the ring simulation.
//!
//! This crate provides the fundamental abstractions for the consistent-hash
//! ring under study:
//! - Bounded token space and uniform token sampling
//! - Node identity and vnode generation by rejection sampling
//! - The sorted token ring with clockwise successor queries

pub mod error;
pub mod node;
pub mod ring;
pub mod token;
pub mod vnode;

pub use error::{Error, Result};
pub use node::{Node, NodeId, DEFAULT_NUM_TOKENS};
pub use ring::TokenRing;
pub use token::{Token, TokenSpace};
pub use vnode::VirtualNode;
