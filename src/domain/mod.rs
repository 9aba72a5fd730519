//! Domain layer - pure business logic, no I/O.

pub mod checkin;
pub mod dosha;
pub mod foundation;
pub mod onboarding;
