// Terminal client for the cozy hot chocolate spot map
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod event;
pub mod export;
pub mod logging;
pub mod terminal;
pub mod ui;
