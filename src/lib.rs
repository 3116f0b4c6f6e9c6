pub mod cli;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod export;
pub mod store;
pub mod ui;
