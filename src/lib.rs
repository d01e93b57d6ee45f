pub mod chart;
pub mod common;
pub mod config;
pub mod data_loader;
pub mod errors;
pub mod export;
pub mod features;
pub mod generate_commands;
pub mod model;

pub mod server;
