pub mod account;
pub mod forms;
pub mod session;
pub mod sidebar;
pub mod snapshot;
