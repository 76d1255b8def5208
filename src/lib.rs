pub mod cli;
pub mod config;
pub mod fetch;
pub mod headless;
pub mod logging;
pub mod posts;
pub mod scope;
pub mod ui;
