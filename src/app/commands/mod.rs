pub mod bind;
pub mod catalog;
pub mod config;
