//! Check-in command handlers.

mod process_checkin;

pub use process_checkin::{ProcessCheckinCommand, ProcessCheckinHandler, ProcessCheckinResult};
