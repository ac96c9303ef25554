pub mod core;
pub mod dashboard;
pub mod gate;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod render;
pub mod security;
pub mod stores;
pub mod utils;
