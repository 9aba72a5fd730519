//! Adapters layer - implementations of the ports against real infrastructure.

pub mod ai;
pub mod emotion;
pub mod http;
pub mod memory;
