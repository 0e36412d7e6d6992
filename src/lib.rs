pub mod audit;
pub mod cli;
pub mod config;
pub mod logging;
pub mod manifest;
pub mod parser;
pub mod runner;
pub mod version;
