pub mod cli;
pub mod config;
pub mod demos;
pub mod headless;
pub mod logging;
pub mod ui;
