//! Check-in HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CheckinHandlers;
pub use routes::checkin_routes;
