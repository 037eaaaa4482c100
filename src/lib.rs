pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod server;
