pub mod api;
pub mod response;
pub mod user;
