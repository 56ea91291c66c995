//! REST client module.
//!
//! Talks to the users backend over its JSON contract.

mod client;

pub use client::*;
