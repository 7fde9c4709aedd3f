pub mod api;
pub mod client;
pub mod core;
pub mod render;
