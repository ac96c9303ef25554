pub mod actions;
pub mod api;
pub mod client;
pub mod dashboard;
pub mod fallback;
pub mod health;
pub mod login;
pub mod logout;
pub mod metrics;
