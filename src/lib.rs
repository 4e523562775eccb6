pub mod cli;
pub mod config;
pub mod locale;
pub mod logging;
pub mod quote;
pub mod ui;
