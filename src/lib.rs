pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod testing;
