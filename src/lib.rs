pub mod app;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
