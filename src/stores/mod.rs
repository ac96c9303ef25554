pub mod account_directory;
pub mod session_store;
