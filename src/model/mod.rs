pub mod config;
pub mod greeting;
