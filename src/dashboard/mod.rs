pub mod builder;
pub mod catalog;
