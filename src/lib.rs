pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod server;
pub mod service;
pub mod store;
pub mod telemetry;

pub use error::{DeckError, ErrorKind, Result};
