pub mod cart;
pub mod catalog;
pub mod challenge;
pub mod config;
pub mod session;
pub mod timer;
