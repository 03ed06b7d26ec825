pub mod core;
pub mod models;
pub mod gateway;
pub mod survey;
pub mod client;
pub mod utils;
pub mod handlers;
