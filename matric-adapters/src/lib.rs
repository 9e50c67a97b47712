pub mod config;
pub mod crypto;
pub mod http;
pub mod persistence;
