pub mod app;

pub mod cli;

pub mod command;

pub mod config;

pub mod error;

pub mod executor;

pub mod form;

pub mod quote;

pub use command::{ShellCommand, build_add_wireless_network_command};
pub use error::Error;
