pub mod config;
pub mod constants;
pub mod database;
pub mod errors;
pub mod transport;
pub mod utils;
