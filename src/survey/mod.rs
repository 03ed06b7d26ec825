pub mod questions;
pub mod render;
pub mod validate;
