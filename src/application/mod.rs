//! Application layer - orchestrates domain logic behind the ports.

pub mod handlers;
