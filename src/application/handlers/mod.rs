//! Application command and query handlers.

pub mod checkin;
pub mod onboarding;
